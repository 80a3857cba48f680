//! Engine bring-up and status

/// Errors reported by a display-engine implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// SPI transport failure
    Communication,
    /// Engine did not answer within the implementation's deadline
    Timeout,
    /// Engine failed to come out of reset (chip ID not readable)
    NotResponding,
    /// External flash could not be attached or switched to full mode
    FlashUnavailable,
}

/// Engine bring-up
pub trait EngineControl {
    /// Reset and configure the engine for the attached panel
    ///
    /// An error here means the hardware is not usable for this run.
    fn init(&mut self) -> Result<(), EngineError>;

    /// Set backlight PWM duty
    ///
    /// Range is 0 (off) to 0x80 (full brightness).
    fn set_backlight(&mut self, duty: u8) -> Result<(), EngineError>;
}

/// Engine pipeline status
pub trait EngineStatus {
    /// Check if the co-processor is still consuming earlier commands
    ///
    /// This covers both display lists and flash transfers. It is the only
    /// completion signal the engine provides.
    fn is_busy(&mut self) -> Result<bool, EngineError>;
}
