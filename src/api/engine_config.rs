use serde::{Deserialize, Serialize};

use crate::core::{AnimationTuning, GlyphRecord, VaseLayout, Viewport, glyph::seed_records};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every field defaults to
/// the original six-vase chart's values, so a partial (or empty) JSON
/// document still yields a working engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaseEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub layout: VaseLayout,
    #[serde(default)]
    pub animation: AnimationTuning,
    #[serde(default = "seed_records")]
    pub glyphs: Vec<GlyphRecord>,
}

impl Default for VaseEngineConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            layout: VaseLayout::default(),
            animation: AnimationTuning::default(),
            glyphs: seed_records(),
        }
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(700, 500)
}
