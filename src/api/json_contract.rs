use crate::core::GlyphRecord;
use crate::error::{VaseError, VaseResult};

use super::VaseEngineConfig;

/// Parses an engine configuration from a JSON document.
///
/// Missing fields fall back to the seed chart's defaults, so `{}` is a
/// valid document.
pub fn config_from_json(json: &str) -> VaseResult<VaseEngineConfig> {
    serde_json::from_str(json)
        .map_err(|err| VaseError::InvalidData(format!("invalid engine config json: {err}")))
}

/// Parses a bare glyph list from a JSON array.
///
/// Record-level invariants are checked later, at engine construction.
pub fn glyphs_from_json(json: &str) -> VaseResult<Vec<GlyphRecord>> {
    serde_json::from_str(json)
        .map_err(|err| VaseError::InvalidData(format!("invalid glyph json: {err}")))
}
