//! Anchor normalization through the menu surface.

use proptest::prelude::*;
use spark_grid::host::{fixed_rect, stretch_rect};
use spark_grid::types::RectGeometry;
use spark_grid::{
    approx_eq, normalize_anchors, size, vec2, CommandError, LayoutHost, Menu, Scene,
    AUTO_SET_ANCHOR,
};

#[test]
fn command_reaches_fixed_point_in_one_call() {
    let mut scene = Scene::new();
    let canvas = scene.add_canvas("Canvas", 1920.0, 1080.0);
    let panel = scene.add_rect("Panel", canvas, stretch_rect()).unwrap();
    let button = scene.add_rect("Button", panel, fixed_rect(240.0, 80.0)).unwrap();
    let menu = Menu::default();

    menu.invoke(AUTO_SET_ANCHOR, &mut scene, Some(button)).unwrap();
    let once = scene.node(button).unwrap().rect;

    menu.invoke(AUTO_SET_ANCHOR, &mut scene, Some(button)).unwrap();
    let twice = scene.node(button).unwrap().rect;

    assert_eq!(once, twice);
    assert_eq!(once.size_delta, vec2(0.0, 0.0));
    assert_eq!(once.anchored_position, vec2(0.0, 0.0));
}

#[test]
fn command_survives_parent_resize() {
    let mut scene = Scene::new();
    let canvas = scene.add_canvas("Canvas", 1000.0, 1000.0);
    let button = scene.add_rect("Button", canvas, fixed_rect(200.0, 100.0)).unwrap();
    Menu::default().invoke(AUTO_SET_ANCHOR, &mut scene, Some(button)).unwrap();

    // Doubling the canvas doubles the button instead of keeping 200x100
    scene.node_mut(canvas).unwrap().rect.size_delta = vec2(2000.0, 2000.0);
    let resized = scene.rect_size(button).unwrap();
    assert!(approx_eq(resized.width, 400.0));
    assert!(approx_eq(resized.height, 200.0));
}

#[test]
fn command_unavailable_on_canvas() {
    let mut scene = Scene::new();
    let canvas = scene.add_canvas("Canvas", 1000.0, 1000.0);
    let menu = Menu::default();

    assert!(!menu.is_enabled(AUTO_SET_ANCHOR, &scene, Some(canvas)));
    assert!(matches!(
        menu.invoke(AUTO_SET_ANCHOR, &mut scene, Some(canvas)),
        Err(CommandError::Unavailable { .. })
    ));
}

#[test]
fn command_reports_zero_area_parent() {
    let mut scene = Scene::new();
    let canvas = scene.add_canvas("Canvas", 0.0, 500.0);
    let child = scene.add_rect("Child", canvas, fixed_rect(10.0, 10.0)).unwrap();
    let before: RectGeometry = scene.node(child).unwrap().rect;

    let err = Menu::default()
        .invoke(AUTO_SET_ANCHOR, &mut scene, Some(child))
        .unwrap_err();

    assert!(matches!(err, CommandError::Anchor(_)));
    assert_eq!(scene.node(child).unwrap().rect, before);
}

proptest! {
    /// Property: normalizing a node never changes its resolved size
    #[test]
    fn normalization_preserves_rect_size(
        parent_w in 10.0f32..4000.0,
        parent_h in 10.0f32..4000.0,
        min_x in -200.0f32..200.0,
        min_y in -200.0f32..200.0,
        max_x in -200.0f32..200.0,
        max_y in -200.0f32..200.0,
    ) {
        let update = normalize_anchors(
            vec2(min_x, min_y),
            vec2(max_x, max_y),
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            size(parent_w, parent_h),
        ).unwrap();

        // Stretched rect: size = parent + (max - min) offsets
        let before_w = parent_w + max_x - min_x;
        let after_w = parent_w * (update.anchor_max.x - update.anchor_min.x);
        let before_h = parent_h + max_y - min_y;
        let after_h = parent_h * (update.anchor_max.y - update.anchor_min.y);

        prop_assert!((before_w - after_w).abs() <= 1e-2);
        prop_assert!((before_h - after_h).abs() <= 1e-2);
    }
}
