//! External flash transfers
//!
//! The engine owns a QSPI flash holding the pre-compressed images and a
//! block of general-purpose graphics RAM (RAM_G). Copies between the two
//! run asynchronously on the engine; completion is observed through
//! [`EngineStatus::is_busy`](crate::EngineStatus::is_busy).

use crate::engine::EngineError;

/// Flash-to-RAM_G transfer operations
pub trait FlashTransfer {
    /// Attach the external flash and switch it to full-speed mode
    fn init_flash(&mut self) -> Result<(), EngineError>;

    /// Queue a zero-fill of `length` bytes of RAM_G starting at `dest`
    fn zero_fill(&mut self, dest: u32, length: u32) -> Result<(), EngineError>;

    /// Queue a copy of `length` bytes from flash offset `src` to RAM_G `dest`
    ///
    /// The engine requires `src` and `length` to be multiples of 64 and
    /// `dest` to be 4-byte aligned; the provisioning tool lays the flash
    /// image out accordingly.
    fn flash_read(&mut self, dest: u32, src: u32, length: u32) -> Result<(), EngineError>;
}
