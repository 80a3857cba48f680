//! Frame rendering
//!
//! Builds one complete display list per tick and submits it as a single
//! batch, so the engine never sees a half-written list.

use eve_astc_hal::{
    ClearFlags, DisplayList, EngineError, Primitive, Rgb, Tag, TouchTransform, WidgetOptions,
};

use crate::catalog::{Catalog, CatalogError};
use crate::config::ViewerConfig;
use crate::selection::{SelectionState, IMAGE_RAM_ADDR};

/// Whether the engine came up and rendering is allowed
///
/// Set once after a successful start-up and never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activation {
    #[default]
    Inactive,
    Active,
}

impl Activation {
    pub const fn is_active(self) -> bool {
        matches!(self, Activation::Active)
    }
}

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    Engine(EngineError),
    Catalog(CatalogError),
}

impl From<EngineError> for RenderError {
    fn from(e: EngineError) -> Self {
        RenderError::Engine(e)
    }
}

impl From<CatalogError> for RenderError {
    fn from(e: CatalogError) -> Self {
        RenderError::Catalog(e)
    }
}

/// Font used for calibration prompts and the report screen
const REPORT_FONT: u8 = 26;

/// Labels for the six transform registers, top to bottom
const REPORT_LABELS: [&str; 6] = [
    "TOUCH_TRANSFORM_A:",
    "TOUCH_TRANSFORM_B:",
    "TOUCH_TRANSFORM_C:",
    "TOUCH_TRANSFORM_D:",
    "TOUCH_TRANSFORM_E:",
    "TOUCH_TRANSFORM_F:",
];

/// Draws gallery frames and calibration screens
pub struct FrameRenderer<'a> {
    config: &'a ViewerConfig,
    catalog: &'a Catalog,
}

impl<'a> FrameRenderer<'a> {
    pub const fn new(config: &'a ViewerConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    /// Draw the selected image with its index overlaid
    ///
    /// Does nothing while inactive. The index is read once, so the bitmap
    /// and the label in one submission always belong together.
    pub fn render_frame<E: DisplayList + ?Sized>(
        &self,
        activation: Activation,
        selection: &SelectionState,
        engine: &mut E,
    ) -> Result<(), RenderError> {
        if !activation.is_active() {
            return Ok(());
        }

        let index = selection.current_index();
        let image = self.catalog.lookup(index)?;

        engine.begin_batch()?;
        self.start_list(engine, self.config.background)?;
        engine.color(self.config.image_tint)?;

        engine.tag(self.config.advance_tag.0)?;
        engine.set_bitmap(
            IMAGE_RAM_ADDR,
            image.block.format(),
            self.config.image_width,
            self.config.image_height,
        )?;
        engine.begin(Primitive::Bitmaps)?;
        engine.vertex2f(0, 0)?;
        engine.end()?;

        let overlay = &self.config.overlay;
        engine.color(overlay.color)?;
        engine.number(
            overlay.x,
            overlay.y,
            overlay.font,
            WidgetOptions::NONE,
            index as i32,
        )?;

        self.finish_list(engine)?;
        Ok(())
    }

    /// Show the "tap the dot" prompt and run the engine's calibration widget
    pub fn render_calibration_prompt<E: DisplayList + ?Sized>(
        &self,
        engine: &mut E,
    ) -> Result<(), EngineError> {
        engine.begin_batch()?;
        self.start_list(engine, Rgb::BLACK)?;
        engine.text(
            (self.config.screen_width / 2) as i16,
            50,
            REPORT_FONT,
            WidgetOptions::CENTER,
            "Please tap on the dot.",
        )?;
        engine.calibrate()?;
        self.finish_list(engine)
    }

    /// Show freshly recorded transform values for copying into a profile
    pub fn render_calibration_report<E: DisplayList + ?Sized>(
        &self,
        transform: &TouchTransform,
        engine: &mut E,
    ) -> Result<(), EngineError> {
        engine.begin_batch()?;
        self.start_list(engine, Rgb::BLACK)?;
        engine.tag(Tag::NONE.0)?;

        for (row, label) in REPORT_LABELS.iter().enumerate() {
            engine.text(5, report_row_y(row), REPORT_FONT, WidgetOptions::NONE, label)?;
        }

        engine.set_base(16)?;
        for (row, word) in transform.words().iter().enumerate() {
            // Register words are shown as raw 32-bit hex, not as signed values
            engine.number(
                310,
                report_row_y(row),
                REPORT_FONT,
                WidgetOptions::right_padded(8),
                *word as i32,
            )?;
        }

        self.finish_list(engine)
    }

    fn start_list<E: DisplayList + ?Sized>(
        &self,
        engine: &mut E,
        background: Rgb,
    ) -> Result<(), EngineError> {
        engine.dl_start()?;
        engine.clear_color(background)?;
        engine.clear(ClearFlags::ALL)?;
        engine.vertex_format(0)
    }

    fn finish_list<E: DisplayList + ?Sized>(&self, engine: &mut E) -> Result<(), EngineError> {
        engine.display()?;
        engine.swap()?;
        engine.commit_batch()
    }
}

const fn report_row_y(row: usize) -> i16 {
    15 + 15 * row as i16
}
