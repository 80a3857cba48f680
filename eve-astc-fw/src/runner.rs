//! Gallery tick loop
//!
//! Polls touch and submits a frame once per tick. The engine's busy flag
//! is the only back-pressure: a tick where the engine is still working
//! simply does nothing.

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};

use eve_astc_core::{Mode, Viewer, ViewerConfig, CATALOG};
use eve_astc_hal::DisplayEngine;

/// Bring up the viewer and run it forever
///
/// If the configuration is rejected or the engine does not come up, the
/// failure is logged once and the loop idles without touching the engine
/// again.
pub async fn run_viewer<E: DisplayEngine>(engine: &mut E, config: ViewerConfig) -> ! {
    info!(
        "Gallery starting: profile={}, {} images",
        config.profile.name(),
        CATALOG.len()
    );

    let mut viewer = match Viewer::new(config, &CATALOG) {
        Ok(viewer) => viewer,
        Err(e) => {
            error!("Invalid viewer config: {:?}", e);
            idle().await
        }
    };

    match viewer.initialize(engine) {
        Ok(_) => info!("Display engine active"),
        Err(e) => {
            error!("Display engine not ready: {:?}, touch and rendering disabled", e);
            idle().await
        }
    }

    if viewer.mode() == Mode::Calibrating {
        info!("Touch calibration running, tap the dots");
    }

    let mut ticker = Ticker::every(Duration::from_millis(
        viewer.config().tick_interval_ms as u64,
    ));

    loop {
        ticker.next().await;
        tick(&mut viewer, engine);
    }
}

/// One scheduler tick: poll touch, then render
pub fn tick<E: DisplayEngine>(viewer: &mut Viewer, engine: &mut E) {
    let was_calibrating = viewer.mode() == Mode::Calibrating;

    match viewer.poll(engine) {
        Ok(Some(request)) => {
            let image = &request.descriptor;
            let bpp = image.block.bits_per_pixel_x100();
            info!(
                "Loading image {} ({}): {} bytes from flash offset {}, {}.{=u16:02} bpp",
                image.index,
                image.name,
                image.byte_length,
                image.flash_offset,
                bpp / 100,
                bpp % 100
            );
        }
        Ok(None) => {}
        Err(e) => warn!("Touch poll failed: {:?}", e),
    }

    if was_calibrating {
        if let Some(t) = viewer.calibration() {
            info!(
                "Touch calibration: A={=u32:#x} B={=u32:#x} C={=u32:#x} D={=u32:#x} E={=u32:#x} F={=u32:#x}",
                t.a, t.b, t.c, t.d, t.e, t.f
            );
        }
    }

    if let Err(e) = viewer.render_frame(engine) {
        warn!("Frame submission failed: {:?}", e);
    }
}

/// Park forever after a start-up failure
async fn idle() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}
