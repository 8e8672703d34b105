use std::time::Duration;

pub mod model;
pub mod view;

pub use model::State;
pub use view::draw;

pub const RING_PADDING: f64 = 16.0; // space between the ring and the window edge
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const IDLE_HEADLINE: &str = "Value";
pub const HEADLINE_FONT_SIZE: f64 = 40.0;
pub const CAPTION_FONT_SIZE: f64 = 16.0;
pub const POINTER_HALO_GROWTH: f64 = 12.0; // extra halo stroke around the pointer
