//! vase-rs: animated vase bar-chart glyph engine.
//!
//! This crate keeps an ordered set of "vase" glyphs (an outlined container
//! plus a liquid fill sharing a common baseline), exposes increase/decrease
//! operations that step every fill level by a fixed amount under clamping,
//! and animates fill transitions with an elastic-overshoot easing. Drawing
//! is backend-agnostic behind the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{VaseEngine, VaseEngineConfig};
pub use error::{VaseError, VaseResult};
