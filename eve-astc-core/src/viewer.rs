//! Gallery viewer
//!
//! Ties catalog, selection and rendering to one display engine. The
//! scheduler owns the `Viewer` and calls, once per tick and in this order:
//!
//! 1. [`Viewer::poll`] - sample touch, maybe start loading the next image
//! 2. [`Viewer::render_frame`] - submit the frame for the current image
//!
//! Both skip the tick while the engine reports busy. A failed start-up
//! leaves the viewer inactive for the rest of the run; there is no retry.

use eve_astc_hal::{DisplayEngine, EngineError, Tag, TouchTransform};

use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConfigError, ViewerConfig};
use crate::render::{Activation, FrameRenderer, RenderError};
use crate::selection::{LoadRequest, SelectionState};

/// Viewer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewerError {
    /// Start-up failed; the viewer stays inactive
    NotReady(EngineError),
    /// Engine I/O failed during a tick
    Engine(EngineError),
    /// Catalog index out of range
    Catalog(CatalogError),
    /// Rejected configuration
    Config(ConfigError),
}

impl From<EngineError> for ViewerError {
    fn from(e: EngineError) -> Self {
        ViewerError::Engine(e)
    }
}

impl From<CatalogError> for ViewerError {
    fn from(e: CatalogError) -> Self {
        ViewerError::Catalog(e)
    }
}

impl From<ConfigError> for ViewerError {
    fn from(e: ConfigError) -> Self {
        ViewerError::Config(e)
    }
}

impl From<RenderError> for ViewerError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Engine(e) => ViewerError::Engine(e),
            RenderError::Catalog(e) => ViewerError::Catalog(e),
        }
    }
}

/// What the viewer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Image gallery
    Gallery,
    /// Engine is running the touch calibration widget
    Calibrating,
    /// Calibration finished; recorded values are on screen
    Report(TouchTransform),
}

/// Gallery state machine bound to one configuration and catalog
pub struct Viewer {
    config: ViewerConfig,
    catalog: &'static Catalog,
    selection: SelectionState,
    activation: Activation,
    mode: Mode,
    /// First start-up error, kept so later calls never retry
    startup_failure: Option<ViewerError>,
}

impl Viewer {
    /// Create an inactive viewer at the first image
    pub fn new(config: ViewerConfig, catalog: &'static Catalog) -> Result<Self, ViewerError> {
        config.validate()?;

        Ok(Self {
            config,
            catalog,
            selection: SelectionState::new(),
            activation: Activation::Inactive,
            mode: Mode::Gallery,
            startup_failure: None,
        })
    }

    /// Bring up the engine and load the first image
    ///
    /// On error the viewer stays inactive for the rest of the run: later
    /// `poll` and `render_frame` calls do nothing, and calling `initialize`
    /// again returns the same error without touching the engine.
    pub fn initialize<E: DisplayEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<Activation, ViewerError> {
        if let Some(e) = self.startup_failure {
            return Err(e);
        }
        if self.activation.is_active() {
            return Ok(self.activation);
        }

        if let Err(e) = self.start(engine) {
            let e = match e {
                ViewerError::Engine(e) => ViewerError::NotReady(e),
                other => other,
            };
            self.startup_failure = Some(e);
            return Err(e);
        }
        self.activation = Activation::Active;
        Ok(self.activation)
    }

    fn start<E: DisplayEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), ViewerError> {
        engine.init()?;
        engine.set_backlight(self.config.backlight_duty)?;

        match self.config.profile.touch_transform() {
            Some(transform) => engine.write_touch_transform(&transform)?,
            None => {
                FrameRenderer::new(&self.config, self.catalog).render_calibration_prompt(engine)?;
                self.mode = Mode::Calibrating;
            }
        }

        engine.init_flash()?;

        let image = self.catalog.lookup(self.selection.current_index())?;
        LoadRequest::for_image(self.catalog, *image).issue(engine)?;
        Ok(())
    }

    /// Sample touch and start loading the next image if requested
    ///
    /// Returns the issued load, if any. Nothing is read or issued while
    /// the engine is busy. The selection only moves once the transfer has
    /// been issued, so a failed transfer leaves the previous image selected
    /// and the press is retried on the next tick.
    pub fn poll<E: DisplayEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<Option<LoadRequest>, ViewerError> {
        if !self.activation.is_active() {
            return Ok(None);
        }

        match self.mode {
            Mode::Gallery => {
                let busy = engine.is_busy()?;
                let tag = if busy { Tag::NONE } else { engine.touch_tag()? };

                let mut next = self.selection;
                let request = next.poll(self.catalog, busy, tag, self.config.advance_tag);
                if let Some(request) = &request {
                    request.issue(engine)?;
                }
                self.selection = next;
                Ok(request)
            }
            Mode::Calibrating => {
                if !engine.is_busy()? {
                    let transform = engine.read_touch_transform()?;
                    self.mode = Mode::Report(transform);
                }
                Ok(None)
            }
            Mode::Report(_) => Ok(None),
        }
    }

    /// Submit this tick's frame
    pub fn render_frame<E: DisplayEngine + ?Sized>(
        &self,
        engine: &mut E,
    ) -> Result<(), ViewerError> {
        if !self.activation.is_active() || engine.is_busy()? {
            return Ok(());
        }

        let renderer = FrameRenderer::new(&self.config, self.catalog);
        match &self.mode {
            Mode::Gallery => renderer.render_frame(self.activation, &self.selection, engine)?,
            // A new list would abort the running calibration widget
            Mode::Calibrating => {}
            Mode::Report(transform) => renderer.render_calibration_report(transform, engine)?,
        }
        Ok(())
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Transform recorded by the interactive routine, once available
    pub fn calibration(&self) -> Option<TouchTransform> {
        match self.mode {
            Mode::Report(transform) => Some(transform),
            _ => None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}
