use vase_rs::api::build_render_frame;
use vase_rs::core::{GlyphSet, VaseLayout, Viewport};
use vase_rs::render::{Color, NullRenderer, RectPrimitive, RenderFrame, Renderer};

#[test]
fn frame_builder_emits_outline_and_fill_per_glyph() {
    let glyphs = GlyphSet::seed();
    let layout = VaseLayout::default();
    let fills = glyphs.fill_levels();

    let frame = build_render_frame(Viewport::new(700, 500), layout, &glyphs, &fills);
    frame.validate().expect("valid frame");
    assert_eq!(frame.rects.len(), glyphs.len() * 2);
}

#[test]
fn frame_geometry_shares_the_baseline() {
    let glyphs = GlyphSet::seed();
    let layout = VaseLayout::default();
    let fills = glyphs.fill_levels();

    let frame = build_render_frame(Viewport::new(700, 500), layout, &glyphs, &fills);

    for (index, record) in glyphs.records().iter().enumerate() {
        let outline = frame.rects[index * 2];
        let fill = frame.rects[index * 2 + 1];

        let x = index as f64 * layout.padding + layout.margin;
        assert_eq!(outline.x, x);
        assert_eq!(fill.x, x);

        assert_eq!(outline.height, record.container_height);
        assert_eq!(outline.y, layout.baseline_y - record.container_height);
        assert!(outline.fill_color.is_none());
        assert_eq!(outline.stroke_color, Some(record.color));

        assert_eq!(fill.height, record.fill_level);
        assert_eq!(fill.y, layout.baseline_y - record.fill_level);
        assert_eq!(fill.fill_color, Some(record.color));
    }
}

#[test]
fn frame_builder_uses_animated_fill_values() {
    let glyphs = GlyphSet::seed();
    let layout = VaseLayout::default();
    let fills = vec![1.0; glyphs.len()];

    let frame = build_render_frame(Viewport::new(700, 500), layout, &glyphs, &fills);
    for index in 0..glyphs.len() {
        assert_eq!(frame.rects[index * 2 + 1].height, 1.0);
    }
}

#[test]
fn negative_animated_overshoot_is_floored() {
    let glyphs = GlyphSet::seed();
    let fills = vec![-0.5; glyphs.len()];

    let frame = build_render_frame(Viewport::new(700, 500), VaseLayout::default(), &glyphs, &fills);
    frame.validate().expect("valid frame");
    for index in 0..glyphs.len() {
        assert_eq!(frame.rects[index * 2 + 1].height, 0.0);
    }
}

#[test]
fn invalid_viewport_fails_validation() {
    let frame = RenderFrame::new(Viewport::new(0, 500));
    assert!(frame.validate().is_err());
}

#[test]
fn rect_without_paint_source_is_rejected() {
    let rect = RectPrimitive {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
        fill_color: None,
        stroke_color: None,
        stroke_width: 1.0,
    };
    assert!(rect.validate().is_err());
}

#[test]
fn rect_with_non_finite_geometry_is_rejected() {
    let rect = RectPrimitive::filled(f64::NAN, 0.0, 10.0, 10.0, Color::rgb(0.0, 0.0, 0.0), 1.0);
    assert!(rect.validate().is_err());
}

#[test]
fn rect_with_zero_stroke_width_is_rejected() {
    let rect = RectPrimitive::outlined(0.0, 0.0, 10.0, 10.0, Color::rgb(0.0, 0.0, 0.0), 0.0);
    assert!(rect.validate().is_err());
}

#[test]
fn out_of_range_color_is_rejected() {
    assert!(Color::rgb(1.5, 0.0, 0.0).validate().is_err());
    assert!(Color::rgba(0.0, 0.0, 0.0, -0.1).validate().is_err());
    assert!(Color::from_rgb8(0xFD, 0xA7, 0xDF).validate().is_ok());
}

#[test]
fn null_renderer_counts_rects_and_validates() {
    let glyphs = GlyphSet::seed();
    let fills = glyphs.fill_levels();
    let frame = build_render_frame(Viewport::new(700, 500), VaseLayout::default(), &glyphs, &fills);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_rect_count, 12);
    assert_eq!(renderer.frames_rendered, 1);

    let bad = RenderFrame::new(Viewport::new(0, 0));
    assert!(renderer.render(&bad).is_err());
}

#[test]
fn layout_validation_rejects_bad_fields() {
    let layout = VaseLayout {
        vase_width: 0.0,
        ..VaseLayout::default()
    };
    assert!(layout.validate().is_err());

    let layout = VaseLayout {
        margin: -1.0,
        ..VaseLayout::default()
    };
    assert!(layout.validate().is_err());

    let layout = VaseLayout {
        baseline_y: f64::INFINITY,
        ..VaseLayout::default()
    };
    assert!(layout.validate().is_err());

    assert!(VaseLayout::default().validate().is_ok());
}
