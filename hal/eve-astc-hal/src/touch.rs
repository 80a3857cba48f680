//! Touch input
//!
//! The engine resolves touches against the tag buffer of the last
//! displayed list, so the application only ever sees a tag value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Tag value reported for a touched region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag(pub u8);

impl Tag {
    /// No touch (or touch on an untagged region)
    pub const NONE: Self = Self(0);

    /// Check if this is the "no touch" tag
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Touch screen transform matrix
///
/// Six signed 16.16 fixed-point coefficients as written to the
/// `REG_TOUCH_TRANSFORM_A..F` registers. Stored as raw register words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchTransform {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
}

impl TouchTransform {
    /// Create a transform from raw register words
    pub const fn new(a: u32, b: u32, c: u32, d: u32, e: u32, f: u32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Register words in A..F order
    pub const fn words(&self) -> [u32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

/// Touch controller access
pub trait TouchInput {
    /// Read the tag of the first touch point
    fn touch_tag(&mut self) -> Result<Tag, EngineError>;

    /// Write all six transform registers
    fn write_touch_transform(&mut self, transform: &TouchTransform) -> Result<(), EngineError>;

    /// Read back the six transform registers
    fn read_touch_transform(&mut self) -> Result<TouchTransform, EngineError>;
}
