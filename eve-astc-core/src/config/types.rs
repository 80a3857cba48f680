//! Viewer configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use eve_astc_hal::{Rgb, Tag};

use super::profile::DisplayProfile;

/// Brightest backlight PWM duty the engine accepts
pub const MAX_BACKLIGHT_DUTY: u8 = 0x80;

/// Tick period the gallery is designed for, in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 20;

/// Tag attached to the image so a touch on it advances the gallery
pub const DEFAULT_ADVANCE_TAG: Tag = Tag(10);

/// Position and font of the image number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlayConfig {
    pub x: i16,
    pub y: i16,
    /// Built-in ROM font handle
    pub font: u8,
    pub color: Rgb,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            x: 770,
            y: 450,
            font: 30,
            color: Rgb::BLACK,
        }
    }
}

/// Gallery settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewerConfig {
    /// Panel the firmware runs on
    pub profile: DisplayProfile,
    /// Horizontal panel resolution, used to center prompts
    pub screen_width: u16,
    /// Backlight PWM duty (0 = off, 0x80 = max)
    pub backlight_duty: u8,
    /// Touch tag that advances to the next image
    pub advance_tag: Tag,
    /// Size every image is bound with, in pixels
    pub image_width: u16,
    pub image_height: u16,
    /// Clear color behind the image
    pub background: Rgb,
    /// Draw color for the bitmap (white leaves texels unchanged)
    pub image_tint: Rgb,
    pub overlay: OverlayConfig,
    /// Scheduler period in milliseconds
    pub tick_interval_ms: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            profile: DisplayProfile::default(),
            screen_width: 1024,
            backlight_duty: 0x30,
            advance_tag: DEFAULT_ADVANCE_TAG,
            image_width: 1280,
            image_height: 640,
            background: Rgb::WHITE,
            image_tint: Rgb::WHITE,
            overlay: OverlayConfig::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Backlight duty above `MAX_BACKLIGHT_DUTY`
    BacklightOutOfRange(u8),
    /// Advance tag of 0 would fire on "no touch"
    InvalidAdvanceTag,
    /// Tick interval of zero
    InvalidTickInterval,
}

impl ViewerConfig {
    /// Create the default configuration for a given panel
    pub fn for_profile(profile: DisplayProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Check the configuration for values the engine cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backlight_duty > MAX_BACKLIGHT_DUTY {
            return Err(ConfigError::BacklightOutOfRange(self.backlight_duty));
        }
        if self.advance_tag.is_none() {
            return Err(ConfigError::InvalidAdvanceTag);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }
}
