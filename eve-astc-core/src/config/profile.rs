//! Display profiles
//!
//! Each supported panel ships with touch calibration values recorded
//! once with the interactive routine. Picking the profile at start-up
//! replaces per-panel build flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use eve_astc_hal::TouchTransform;

/// Target display module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayProfile {
    /// Powertip PAF90 9" BT817 module
    #[default]
    Paf90,
    /// Riverdi 4.3" BT81x module
    RiTft43,
    /// Matrix Orbital EVE3 4.3" with glass
    Eve3_43G,
    /// Matrix Orbital EVE3 5.0" with glass
    Eve3_50G,
    /// No stored calibration: run the on-screen routine and report values
    Interactive,
}

impl DisplayProfile {
    /// Every profile, in declaration order
    pub const ALL: [DisplayProfile; 5] = [
        DisplayProfile::Paf90,
        DisplayProfile::RiTft43,
        DisplayProfile::Eve3_43G,
        DisplayProfile::Eve3_50G,
        DisplayProfile::Interactive,
    ];

    /// Pre-recorded touch transform, if this profile has one
    pub const fn touch_transform(self) -> Option<TouchTransform> {
        match self {
            DisplayProfile::Paf90 => Some(TouchTransform::new(
                0x0000_0159,
                0x0001_019c,
                0xfff9_3625,
                0x0001_0157,
                0x0000_0000,
                0x0000_c101,
            )),
            DisplayProfile::RiTft43 => Some(TouchTransform::new(
                0x0000_62cd,
                0xffff_fe45,
                0xfff4_5e0a,
                0x0000_01a3,
                0x0000_5b33,
                0xfffb_b870,
            )),
            DisplayProfile::Eve3_43G => Some(TouchTransform::new(
                0x0000_a1ff,
                0x0000_0680,
                0xffe5_4cc2,
                0xffff_ff53,
                0x0000_912c,
                0xfffe_628d,
            )),
            DisplayProfile::Eve3_50G => Some(TouchTransform::new(
                0x0001_09e4,
                0x0000_07a6,
                0xffec_1eba,
                0x0000_072c,
                0x0001_096a,
                0xfff4_69cf,
            )),
            DisplayProfile::Interactive => None,
        }
    }

    /// Check if start-up has to run the calibration routine
    pub const fn needs_calibration(self) -> bool {
        self.touch_transform().is_none()
    }

    /// Human-readable name for logs
    pub const fn name(self) -> &'static str {
        match self {
            DisplayProfile::Paf90 => "PAF90",
            DisplayProfile::RiTft43 => "RiTFT43",
            DisplayProfile::Eve3_43G => "EVE3-43G",
            DisplayProfile::Eve3_50G => "EVE3-50G",
            DisplayProfile::Interactive => "interactive",
        }
    }
}
