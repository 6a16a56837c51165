//! Navigation-rail destination selection and its animation state.
//!
//! - [`RailSelection`]: count-based progress state machine driven by
//!   explicit [`tick`](RailSelection::tick) calls
//! - [`Rail`]: destinations with opaque host content plus options
//! - [`FrameClock`]: converts wall-clock frames into tick fractions
//!
//! Nothing here renders or schedules. The host calls `tick` once per frame
//! and re-renders when it returns `true`.

mod clock;
mod destination;
mod label;
mod selection;

pub use clock::{elapsed_fraction, FrameClock};
pub use destination::{Destination, Rail, RailItemView};
pub use label::{label_opacity, LabelType};
pub use selection::{Direction, ItemPhase, RailSelection};
