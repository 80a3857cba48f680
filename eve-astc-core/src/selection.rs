//! Touch-driven image selection
//!
//! Decides when to move to the next image and which flash region to
//! stream into RAM_G. All state lives in [`SelectionState`], owned by the
//! polling context; the renderer only reads it.
//!
//! The busy flag is the only synchronization with the engine: while the
//! previous display list or transfer is still being consumed, polling
//! changes nothing and issues nothing.

use eve_astc_hal::{EngineError, FlashTransfer, Tag};

use crate::catalog::{Catalog, ImageDescriptor};

/// RAM_G offset every image is streamed to
pub const IMAGE_RAM_ADDR: u32 = 0;

/// RAM_G region cleared before a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClearRegion {
    pub offset: u32,
    pub length: u32,
}

/// Flash-to-RAM_G load decided by [`SelectionState::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadRequest {
    /// Image to stream
    pub descriptor: ImageDescriptor,
    /// Region to zero first, sized for the largest image
    pub clear_region: ClearRegion,
}

impl LoadRequest {
    /// Build the request for one catalog entry
    pub fn for_image(catalog: &Catalog, descriptor: ImageDescriptor) -> Self {
        Self {
            descriptor,
            clear_region: ClearRegion {
                offset: IMAGE_RAM_ADDR,
                length: catalog.max_byte_length(),
            },
        }
    }

    /// RAM_G destination of the payload
    pub const fn destination(&self) -> u32 {
        self.clear_region.offset
    }

    /// Queue the zero-fill, then the flash read, on the engine
    ///
    /// Both run asynchronously on the engine. The next poll only proceeds
    /// once the engine reports it is no longer busy.
    pub fn issue<E: FlashTransfer + ?Sized>(&self, engine: &mut E) -> Result<(), EngineError> {
        engine.zero_fill(self.clear_region.offset, self.clear_region.length)?;
        engine.flash_read(
            self.destination(),
            self.descriptor.flash_offset,
            self.descriptor.byte_length,
        )
    }
}

/// Currently selected image and touch debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectionState {
    current_index: usize,
    touch_locked: bool,
}

impl SelectionState {
    /// Start at the first image with no touch held
    pub const fn new() -> Self {
        Self {
            current_index: 0,
            touch_locked: false,
        }
    }

    /// Index of the image being shown
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Check if a press has been counted and not yet released
    pub const fn is_touch_locked(&self) -> bool {
        self.touch_locked
    }

    /// Process one touch sample
    ///
    /// - busy engine: nothing changes, nothing is issued
    /// - tag 0: releases the touch lock
    /// - `advance_tag` while unlocked: locks, moves to the next image
    ///   (wrapping at the end of the catalog) and returns its load request
    /// - any other tag: ignored, the lock is left as it is
    pub fn poll(
        &mut self,
        catalog: &Catalog,
        display_busy: bool,
        touch_tag: Tag,
        advance_tag: Tag,
    ) -> Option<LoadRequest> {
        if display_busy {
            return None;
        }

        if touch_tag.is_none() {
            self.touch_locked = false;
            return None;
        }

        if touch_tag != advance_tag || self.touch_locked {
            return None;
        }

        self.touch_locked = true;
        self.current_index = catalog.next_index(self.current_index);
        debug_assert!(self.current_index < catalog.len());

        catalog
            .lookup(self.current_index)
            .ok()
            .map(|descriptor| LoadRequest::for_image(catalog, *descriptor))
    }
}
