pub mod animation;
pub mod glyph;
pub mod layout;
pub mod types;

pub use animation::{AnimationTuning, FillAnimation, FillAnimationSet, elastic_out};
pub use glyph::{GlyphRecord, GlyphSet};
pub use layout::VaseLayout;
pub use types::Viewport;
