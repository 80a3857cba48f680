//! eve-astc - ASTC compression gallery for BT81x displays
//!
//! Firmware glue that drives the gallery at a fixed cadence. Board crates
//! construct their display engine, then spawn a task that awaits
//! [`run_viewer`]:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn display_task(mut engine: Bt817<SpiDevice<'static>>) {
//!     eve_astc_fw::run_viewer(&mut engine, ViewerConfig::default()).await
//! }
//! ```
//!
//! The engine type is board specific, which is why the task itself is not
//! defined here (embassy tasks cannot be generic).

#![no_std]

pub mod runner;

pub use runner::{run_viewer, tick};
