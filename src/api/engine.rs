use tracing::debug;

use crate::core::{AnimationTuning, FillAnimationSet, GlyphSet, VaseLayout, Viewport};
use crate::error::{VaseError, VaseResult};
use crate::interaction::ControlInput;
use crate::render::Renderer;

use super::{VaseEngineConfig, build_render_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `VaseEngine` owns the glyph records (the single source of truth for fill
/// levels), the row layout, the per-glyph fill animations, and the renderer.
/// All mutation happens synchronously inside method calls; animation time
/// advances only through [`VaseEngine::advance`], driven by the host's
/// frame clock.
pub struct VaseEngine<R: Renderer> {
    renderer: R,
    glyphs: GlyphSet,
    viewport: Viewport,
    layout: VaseLayout,
    tuning: AnimationTuning,
    animations: FillAnimationSet,
    clock_ms: f64,
}

impl<R: Renderer> VaseEngine<R> {
    /// Creates a fully initialized engine with explicit domains.
    ///
    /// The animation set starts settled at the seed fill levels; the first
    /// transition runs when an operation retargets it.
    pub fn new(renderer: R, config: VaseEngineConfig) -> VaseResult<Self> {
        if !config.viewport.is_valid() {
            return Err(VaseError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.layout.validate()?;
        config.animation.validate()?;
        let glyphs = GlyphSet::new(config.glyphs)?;
        let animations = FillAnimationSet::settled(&glyphs.fill_levels());

        Ok(Self {
            renderer,
            glyphs,
            viewport: config.viewport,
            layout: config.layout,
            tuning: config.animation,
            animations,
            clock_ms: 0.0,
        })
    }

    /// Steps every fill level up by the fixed amount, clamped to each
    /// container, then retargets the fill animations.
    pub fn increase(&mut self) {
        self.glyphs = self.glyphs.increased();
        debug!(levels = ?self.glyphs.fill_levels(), "increase");
        self.refresh();
    }

    /// Steps every fill level down by the fixed amount, floored at zero,
    /// then retargets the fill animations.
    pub fn decrease(&mut self) {
        self.glyphs = self.glyphs.decreased();
        debug!(levels = ?self.glyphs.fill_levels(), "decrease");
        self.refresh();
    }

    /// Retargets every glyph's animation toward its record's current fill
    /// level. An in-flight transition is superseded mid-curve, never
    /// cancelled with an error.
    pub fn refresh(&mut self) {
        let targets = self.glyphs.fill_levels();
        // Lengths always match: the record count is fixed at construction.
        let _ = self
            .animations
            .retarget(&targets, self.clock_ms, self.tuning);
    }

    /// Dispatches one activation of the named control.
    pub fn handle_control(&mut self, input: ControlInput) {
        match input {
            ControlInput::Increase => self.increase(),
            ControlInput::Decrease => self.decrease(),
        }
    }

    /// Moves the engine clock to `now_ms` and reports whether any fill
    /// transition is still in flight (render-loop continuation hint).
    ///
    /// Stale timestamps are ignored rather than rewinding animations.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if now_ms.is_finite() && now_ms > self.clock_ms {
            self.clock_ms = now_ms;
        }
        self.animations.any_in_flight(self.clock_ms)
    }

    /// Builds the frame for the current animated fill values and hands it
    /// to the renderer.
    pub fn render(&mut self) -> VaseResult<()> {
        let fills = self.animations.sample_all(self.clock_ms);
        let frame = build_render_frame(self.viewport, self.layout, &self.glyphs, &fills);
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> VaseResult<()>
    where
        R: CairoContextRenderer,
    {
        let fills = self.animations.sample_all(self.clock_ms);
        let frame = build_render_frame(self.viewport, self.layout, &self.glyphs, &fills);
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> VaseLayout {
        self.layout
    }

    /// Interpolated on-screen fill height per glyph at the current clock.
    #[must_use]
    pub fn animated_fill_levels(&self) -> Vec<f64> {
        self.animations.sample_all(self.clock_ms)
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
