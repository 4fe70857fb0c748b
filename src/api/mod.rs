mod engine;
mod engine_config;
mod frame_builder;
mod json_contract;

pub use engine::VaseEngine;
pub use engine_config::VaseEngineConfig;
pub use frame_builder::build_render_frame;
pub use json_contract::{config_from_json, glyphs_from_json};
