use gtk4 as gtk;

use crate::api::VaseEngine;
use crate::error::VaseResult;
use crate::interaction::ControlInput;
use crate::render::{CairoContextRenderer, Renderer};

/// Thin adapter binding a `VaseEngine` to GTK4 widgets.
///
/// The host wires this into a `DrawingArea` draw callback and two button
/// handlers; the adapter stays toolkit-minimal so the engine remains
/// testable without GTK.
pub struct GtkVaseAdapter<R: Renderer> {
    engine: VaseEngine<R>,
}

impl<R: Renderer> GtkVaseAdapter<R> {
    #[must_use]
    pub fn new(engine: VaseEngine<R>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &VaseEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn engine_mut(&mut self) -> &mut VaseEngine<R> {
        &mut self.engine
    }

    /// Dispatches a button activation by its stable control id.
    ///
    /// Unknown ids are ignored, mirroring a missing DOM element.
    pub fn activate_control(&mut self, control_id: &str) {
        if let Some(input) = ControlInput::from_control_id(control_id) {
            self.engine.handle_control(input);
        }
    }

    /// Advances the animation clock from a GTK frame-clock timestamp and
    /// reports whether another tick is needed.
    pub fn on_tick(&mut self, frame_time_ms: f64) -> bool {
        self.engine.advance(frame_time_ms)
    }

    /// Draw-callback body for a `gtk::DrawingArea`.
    pub fn draw(&mut self, context: &gtk::cairo::Context) -> VaseResult<()>
    where
        R: CairoContextRenderer,
    {
        self.engine.render_on_cairo_context(context)
    }
}
