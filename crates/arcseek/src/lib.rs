//! Geometry and interaction state for circular multi-segment pickers.
//!
//! [`geometry`] holds the pure angle math. [`Picker`] owns the items laid out on one ring
//! and turns touches and clock ticks into progress changes, seek ring rotation and
//! listener callbacks. Nothing here draws; a host toolkit renders from the accessors.

mod macros;

pub mod animation;
pub mod geometry;
pub mod item;
pub mod listener;
pub mod picker;
pub mod style;

pub use geometry::{ArcSpan, Circle, Point};
pub use item::{ItemEvent, ItemId, ItemLabel, PickerItem, SeekOverlay};
pub use listener::{ListenerId, PickerListener};
pub use picker::Picker;
pub use style::{ActivationPolicy, Style, StyleError};
