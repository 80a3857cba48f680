//! Flash image catalog
//!
//! Maps an image index to its region in the engine's external flash. The
//! table is generated at build time from `flash.map`, the same layout file
//! the provisioning step uses to write the flash image, so offsets and
//! lengths here always match what is on the device.

use eve_astc_hal::BitmapFormat;

/// ASTC block footprint
///
/// Declared in engine format-code order: `Block4x4` is format 37808 and
/// every following footprint is the next code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum AstcBlock {
    Block4x4 = 37808,
    Block5x4,
    Block5x5,
    Block6x5,
    Block6x6,
    Block8x5,
    Block8x6,
    Block8x8,
    Block10x5,
    Block10x6,
    Block10x8,
    Block10x10,
    Block12x10,
    Block12x12,
}

impl AstcBlock {
    /// Engine bitmap format for this footprint
    pub const fn format(self) -> BitmapFormat {
        BitmapFormat(self as u16)
    }

    /// Block width and height in texels
    pub const fn footprint(self) -> (u8, u8) {
        match self {
            AstcBlock::Block4x4 => (4, 4),
            AstcBlock::Block5x4 => (5, 4),
            AstcBlock::Block5x5 => (5, 5),
            AstcBlock::Block6x5 => (6, 5),
            AstcBlock::Block6x6 => (6, 6),
            AstcBlock::Block8x5 => (8, 5),
            AstcBlock::Block8x6 => (8, 6),
            AstcBlock::Block8x8 => (8, 8),
            AstcBlock::Block10x5 => (10, 5),
            AstcBlock::Block10x6 => (10, 6),
            AstcBlock::Block10x8 => (10, 8),
            AstcBlock::Block10x10 => (10, 10),
            AstcBlock::Block12x10 => (12, 10),
            AstcBlock::Block12x12 => (12, 12),
        }
    }

    /// Bits per pixel × 100 (every block is 128 bits)
    pub const fn bits_per_pixel_x100(self) -> u16 {
        let (w, h) = self.footprint();
        12_800 / (w as u16 * h as u16)
    }
}

/// One compressed image in external flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageDescriptor {
    /// Position in the catalog
    pub index: u8,
    /// File name from the flash map
    pub name: &'static str,
    /// Byte offset of the payload in flash
    pub flash_offset: u32,
    /// Payload size in bytes
    pub byte_length: u32,
    /// Compression footprint
    pub block: AstcBlock,
    /// Stored texture width (padded to whole blocks)
    pub width: u16,
    /// Stored texture height (padded to whole blocks)
    pub height: u16,
}

impl ImageDescriptor {
    /// End of the flash region (exclusive)
    pub const fn flash_end(&self) -> u32 {
        self.flash_offset + self.byte_length
    }
}

/// Catalog lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Index past the end of the catalog
    OutOfRange { index: usize, len: usize },
}

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

/// Immutable image table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [ImageDescriptor],
}

/// The catalog generated from `flash.map`
pub static CATALOG: Catalog = Catalog {
    entries: &CATALOG_ENTRIES,
};

impl Catalog {
    /// Wrap an alternative layout
    ///
    /// Entries must be ordered by index starting at 0 and must not be empty.
    pub const fn new(entries: &'static [ImageDescriptor]) -> Self {
        assert!(!entries.is_empty(), "catalog must not be empty");
        Self { entries }
    }

    /// Look up an image by index
    pub fn lookup(&self, index: usize) -> Result<&ImageDescriptor, CatalogError> {
        self.entries.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Number of images
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a catalog holds at least one image
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index that follows `index`, wrapping to 0 after the last image
    pub const fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.entries.len() {
            0
        } else {
            index + 1
        }
    }

    /// Largest payload in the catalog
    ///
    /// RAM_G is cleared to this size before every load so a smaller image
    /// never shows leftovers of a larger one.
    pub fn max_byte_length(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.byte_length)
            .max()
            .unwrap_or(0)
    }

    /// Iterate over all images in index order
    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.entries.iter()
    }
}
