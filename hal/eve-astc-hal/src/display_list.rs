//! Display-list construction
//!
//! Commands are written into the engine's command FIFO between
//! [`DisplayList::begin_batch`] and [`DisplayList::commit_batch`]. An
//! implementation is free to buffer the whole batch and send it as one
//! SPI burst; the engine only shows the new list after `swap`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Self = Self(0x00ff_ffff);
    pub const BLACK: Self = Self(0x0000_0000);
}

/// Buffers cleared by [`DisplayList::clear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClearFlags {
    pub color: bool,
    pub stencil: bool,
    pub tag: bool,
}

impl ClearFlags {
    /// Clear color, stencil and tag buffers
    pub const ALL: Self = Self {
        color: true,
        stencil: true,
        tag: true,
    };
}

/// Graphics primitive started by [`DisplayList::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Primitive {
    Bitmaps,
}

/// Engine bitmap format code (e.g. 37810 for ASTC 5x5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapFormat(pub u16);

/// Layout options for `number` and `text` widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetOptions {
    /// Right-align at the given x coordinate
    pub right_x: bool,
    /// Center horizontally and vertically
    pub center: bool,
    /// Pad with leading zeros to this many digits (0 = no padding)
    pub digits: u8,
}

impl WidgetOptions {
    /// Plain left-aligned output
    pub const NONE: Self = Self {
        right_x: false,
        center: false,
        digits: 0,
    };

    /// Centered output
    pub const CENTER: Self = Self {
        right_x: false,
        center: true,
        digits: 0,
    };

    /// Right-aligned, zero padded to `digits`
    pub const fn right_padded(digits: u8) -> Self {
        Self {
            right_x: true,
            center: false,
            digits,
        }
    }
}

/// Display-list command sink
///
/// Mirrors the subset of display-list instructions and co-processor
/// widgets the gallery needs. Coordinates are in whole pixels once
/// `vertex_format(0)` has been issued.
pub trait DisplayList {
    /// Start writing one atomic batch of commands
    fn begin_batch(&mut self) -> Result<(), EngineError>;

    /// Finish the batch and hand it to the engine
    fn commit_batch(&mut self) -> Result<(), EngineError>;

    /// Start a new display list
    fn dl_start(&mut self) -> Result<(), EngineError>;

    /// Set the color used by `clear`
    fn clear_color(&mut self, color: Rgb) -> Result<(), EngineError>;

    /// Clear the selected buffers
    fn clear(&mut self, flags: ClearFlags) -> Result<(), EngineError>;

    /// Set fractional bits of vertex coordinates (0 = whole pixels)
    fn vertex_format(&mut self, frac_bits: u8) -> Result<(), EngineError>;

    /// Set the current draw color
    fn color(&mut self, color: Rgb) -> Result<(), EngineError>;

    /// Set the tag written for subsequently drawn pixels
    fn tag(&mut self, tag: u8) -> Result<(), EngineError>;

    /// Describe the bitmap at RAM_G `addr`
    fn set_bitmap(
        &mut self,
        addr: u32,
        format: BitmapFormat,
        width: u16,
        height: u16,
    ) -> Result<(), EngineError>;

    /// Begin drawing a primitive
    fn begin(&mut self, primitive: Primitive) -> Result<(), EngineError>;

    /// Emit one vertex
    fn vertex2f(&mut self, x: i16, y: i16) -> Result<(), EngineError>;

    /// End the current primitive
    fn end(&mut self) -> Result<(), EngineError>;

    /// Set the numeric base used by `number`
    fn set_base(&mut self, base: u8) -> Result<(), EngineError>;

    /// Draw a number widget
    fn number(
        &mut self,
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        value: i32,
    ) -> Result<(), EngineError>;

    /// Draw a text widget
    fn text(
        &mut self,
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        text: &str,
    ) -> Result<(), EngineError>;

    /// Run the engine's interactive touch calibration widget
    fn calibrate(&mut self) -> Result<(), EngineError>;

    /// End the display list
    fn display(&mut self) -> Result<(), EngineError>;

    /// Make the finished list the active one
    fn swap(&mut self) -> Result<(), EngineError>;
}
