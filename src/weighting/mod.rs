//! Static weight combination and deviation-degree dynamic weighting.
//!
//! Two stages live here:
//!
//! - [`combine`] flattens a two-level priority hierarchy into one static
//!   weight per leaf indicator: every entry of a second-level priority
//!   vector is scaled by its group's top-level weight and appended in
//!   group order.
//! - [`deviation_degrees`] and [`dynamic_weights`] turn those static
//!   weights into a weight matrix unique to each alternative. Each cell
//!   gets a deviation factor from its column mean, the static weights
//!   are broadcast-multiplied in, and each row is normalized to sum to
//!   exactly 1.
//!
//! Deviation weighting lets indicator importance adapt per alternative:
//! an alternative far below average on an indicator gets that indicator
//! up-weighted relative to one near or above average, instead of every
//! alternative sharing one fixed weight vector.

mod combine;
mod deviation;

pub use combine::combine;
pub use deviation::{deviation_degrees, dynamic_weights};
