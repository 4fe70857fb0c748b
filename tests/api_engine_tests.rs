use vase_rs::api::{VaseEngine, VaseEngineConfig, config_from_json, glyphs_from_json};
use vase_rs::core::{GlyphRecord, Viewport};
use vase_rs::interaction::ControlInput;
use vase_rs::render::{Color, NullRenderer};

fn seeded_engine() -> VaseEngine<NullRenderer> {
    VaseEngine::new(NullRenderer::default(), VaseEngineConfig::default()).expect("valid engine")
}

#[test]
fn engine_starts_settled_at_seed_levels() {
    let engine = seeded_engine();
    assert_eq!(
        engine.glyphs().fill_levels(),
        vec![35.0, 40.0, 10.0, 20.0, 30.0, 5.0]
    );
    assert_eq!(engine.animated_fill_levels(), engine.glyphs().fill_levels());
}

#[test]
fn increase_then_decrease_round_trips_records() {
    let mut engine = seeded_engine();
    engine.decrease();
    assert_eq!(
        engine.glyphs().fill_levels(),
        vec![25.0, 30.0, 0.0, 10.0, 20.0, 0.0]
    );
    engine.increase();
    assert_eq!(
        engine.glyphs().fill_levels(),
        vec![35.0, 40.0, 10.0, 20.0, 30.0, 10.0]
    );
}

#[test]
fn operations_retarget_animations_toward_new_levels() {
    let mut engine = seeded_engine();
    engine.increase();

    // Records swap immediately; the on-screen values converge by duration.
    assert_eq!(engine.animated_fill_levels(), vec![35.0, 40.0, 10.0, 20.0, 30.0, 5.0]);
    let in_flight = engine.advance(1500.0);
    assert!(!in_flight);
    assert_eq!(engine.animated_fill_levels(), engine.glyphs().fill_levels());
}

#[test]
fn advance_never_rewinds_the_clock() {
    let mut engine = seeded_engine();
    engine.advance(1000.0);
    engine.advance(500.0);
    assert_eq!(engine.clock_ms(), 1000.0);
    engine.advance(f64::NAN);
    assert_eq!(engine.clock_ms(), 1000.0);
}

#[test]
fn control_dispatch_matches_direct_operations() {
    let mut via_control = seeded_engine();
    let mut direct = seeded_engine();

    via_control.handle_control(ControlInput::Decrease);
    direct.decrease();
    assert_eq!(via_control.glyphs(), direct.glyphs());

    via_control.handle_control(ControlInput::Increase);
    direct.increase();
    assert_eq!(via_control.glyphs(), direct.glyphs());
}

#[test]
fn control_ids_resolve_both_ways() {
    assert_eq!(
        ControlInput::from_control_id("increase"),
        Some(ControlInput::Increase)
    );
    assert_eq!(
        ControlInput::from_control_id("decrease"),
        Some(ControlInput::Decrease)
    );
    assert_eq!(ControlInput::from_control_id("reset"), None);
    assert_eq!(ControlInput::Increase.control_id(), "increase");
}

#[test]
fn render_hands_one_frame_to_the_backend() {
    let mut engine = seeded_engine();
    engine.render().expect("render");
    engine.increase();
    engine.advance(300.0);
    engine.render().expect("render mid-flight");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 12);
}

#[test]
fn invariant_holds_under_many_operations() {
    let mut engine = seeded_engine();
    for step in 0..40 {
        if step % 3 == 0 {
            engine.increase();
        } else {
            engine.decrease();
        }
        for record in engine.glyphs().records() {
            assert!(record.fill_level >= 0.0);
            assert!(record.fill_level <= record.container_height);
        }
    }
}

#[test]
fn invalid_viewport_is_rejected_at_construction() {
    let config = VaseEngineConfig {
        viewport: Viewport::new(0, 500),
        ..VaseEngineConfig::default()
    };
    assert!(VaseEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn invalid_seed_glyph_is_rejected_at_construction() {
    let config = VaseEngineConfig {
        glyphs: vec![GlyphRecord::new(1, 50.0, 60.0, Color::rgb(0.1, 0.2, 0.3))],
        ..VaseEngineConfig::default()
    };
    assert!(VaseEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn empty_json_config_falls_back_to_defaults() {
    let config = config_from_json("{}").expect("parse");
    assert_eq!(config, VaseEngineConfig::default());
    assert_eq!(config.viewport, Viewport::new(700, 500));
    assert_eq!(config.glyphs.len(), 6);
}

#[test]
fn partial_json_config_overrides_only_named_fields() {
    let config =
        config_from_json(r#"{"viewport": {"width": 1024, "height": 768}}"#).expect("parse");
    assert_eq!(config.viewport, Viewport::new(1024, 768));
    assert_eq!(config.layout, VaseEngineConfig::default().layout);
    assert_eq!(config.animation.duration_ms, 1500.0);
}

#[test]
fn config_json_round_trips() {
    let config = VaseEngineConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed = config_from_json(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_an_invalid_data_error() {
    let err = config_from_json("not json").expect_err("must fail");
    assert!(err.to_string().contains("invalid engine config json"));
    assert!(glyphs_from_json("[{\"id\": true}]").is_err());
}

#[test]
fn bare_glyph_list_parses_from_json() {
    let json = r#"[
        {"id": 1, "container_height": 90.0, "fill_level": 35.0,
         "color": {"red": 0.5, "green": 0.5, "blue": 0.5, "alpha": 1.0}}
    ]"#;
    let glyphs = glyphs_from_json(json).expect("parse");
    assert_eq!(glyphs.len(), 1);
    assert_eq!(glyphs[0].container_height, 90.0);
}
