//! Display-engine abstraction layer
//!
//! This crate defines the interface between the gallery logic and a
//! BT81x ("EVE") graphics controller. Board crates implement these traits
//! on top of their SPI transport and the engine's command protocol; the
//! gallery only ever talks to the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Tick runner (eve-astc-fw)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Gallery logic (eve-astc-core)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  eve-astc-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board-specific engine implementation   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`engine::EngineControl`], [`engine::EngineStatus`] - Bring-up and busy state
//! - [`touch::TouchInput`] - Touch tags and calibration registers
//! - [`flash::FlashTransfer`] - External flash to RAM_G copies
//! - [`display_list::DisplayList`] - Batched display-list commands
//! - [`DisplayEngine`] - Everything above, for convenience bounds

#![no_std]
#![deny(unsafe_code)]

pub mod display_list;
pub mod engine;
pub mod flash;
pub mod touch;

pub use display_list::{BitmapFormat, ClearFlags, DisplayList, Primitive, Rgb, WidgetOptions};
pub use engine::{EngineControl, EngineError, EngineStatus};
pub use flash::FlashTransfer;
pub use touch::{Tag, TouchInput, TouchTransform};

/// A complete display engine
///
/// Implemented automatically for any type providing all of the engine
/// sub-traits.
pub trait DisplayEngine: EngineControl + EngineStatus + TouchInput + FlashTransfer + DisplayList {}

impl<T> DisplayEngine for T where T: EngineControl + EngineStatus + TouchInput + FlashTransfer + DisplayList {}
