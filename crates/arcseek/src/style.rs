use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub const DEFAULT_START_ANGLE: f64 = 90.0;
pub const DEFAULT_END_ANGLE: f64 = 270.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 56.0;
/// Minimum touch target in density-independent units.
pub const MIN_TOUCH_TARGET_DP: f64 = 48.0;
pub const DEFAULT_ANIMATION_MS: u64 = 300;
pub const DEFAULT_HIDE_DELAY_MS: u64 = 500;

/// Who turns on an item's seek overlay before it can be dragged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationPolicy {
    /// A touch-down inside an item enables its overlay and starts the drag.
    #[default]
    #[strum(
        serialize = "touch-down",
        serialize = "touchdown",
        serialize = "auto",
        to_string = "touch-down"
    )]
    TouchDown,
    /// The host calls `enable_seek_overlay` first; touches on disabled items are ignored.
    #[strum(serialize = "host", serialize = "manual", to_string = "host")]
    Host,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Style {
    pub start_angle: f64,
    pub end_angle: f64,
    pub stroke_width: f64,
    pub min_touch_target: f64,
    pub density: f64,
    pub activation: ActivationPolicy,
    pub animation_ms: u64,
    pub hide_delay_ms: u64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            min_touch_target: MIN_TOUCH_TARGET_DP,
            density: 1.0,
            activation: ActivationPolicy::default(),
            animation_ms: DEFAULT_ANIMATION_MS,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StyleError {
    #[error("{0} must be a finite angle")]
    NonFiniteAngle(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("density must be positive, got {0}")]
    Density(f64),
}

impl Style {
    pub fn min_touch_target_px(&self) -> f64 {
        self.min_touch_target * self.density
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        for (name, angle) in [
            ("start_angle", self.start_angle),
            ("end_angle", self.end_angle),
        ] {
            if !angle.is_finite() {
                return Err(StyleError::NonFiniteAngle(name));
            }
        }
        for (name, value) in [
            ("stroke_width", self.stroke_width),
            ("min_touch_target", self.min_touch_target),
        ] {
            if !(value >= 0.0) {
                return Err(StyleError::Negative(name));
            }
        }
        if !(self.density > 0.0) {
            return Err(StyleError::Density(self.density));
        }
        Ok(())
    }
}
