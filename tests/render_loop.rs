use shapes3d::catalog::{self, ShapeKey};
use shapes3d::color::Rgb;
use shapes3d::state::{Screen, ROTATION_SPEED};
use shapes3d::RenderLoop;

fn assert_angles(render_loop: &RenderLoop, expected: f64) {
    for angle in render_loop.rotation().angles {
        assert!(
            (angle - expected).abs() < 1e-9,
            "angle {angle} != {expected}"
        );
    }
}

#[test]
fn every_key_shows_its_catalog_text() {
    let mut render_loop = RenderLoop::new(32, 32);
    for key in ShapeKey::ALL {
        assert!(render_loop.select(key.as_str()));
        let spec = catalog::lookup(key.as_str()).unwrap();
        let panels = render_loop.panels();
        assert_eq!(render_loop.screen(), Screen::Detail);
        assert!(panels.shape_details);
        assert_eq!(panels.shape_title, spec.title);
        assert_eq!(panels.shape_description, spec.description);
        assert_eq!(render_loop.active_shape().map(|s| s.spec.key), Some(key));
    }
}

#[test]
fn unknown_key_changes_nothing() {
    let mut render_loop = RenderLoop::new(32, 32);
    assert!(!render_loop.select("sphere"));
    assert!(render_loop.active_shape().is_none());
    assert_eq!(render_loop.screen(), Screen::Selection);
    assert!(!render_loop.panels().shape_details);

    render_loop.select("torus");
    render_loop.frame();
    let before = render_loop.panels().clone();
    assert!(!render_loop.select("Torus"));
    assert_eq!(render_loop.panels(), &before);
    assert_eq!(
        render_loop.active_shape().map(|s| s.spec.key),
        Some(ShapeKey::Torus)
    );
    assert_angles(&render_loop, ROTATION_SPEED);
}

#[test]
fn angles_grow_linearly_without_wrapping() {
    let mut render_loop = RenderLoop::new(16, 16);
    render_loop.select("icosahedron");
    let frames = 500;
    for _ in 0..frames {
        render_loop.frame();
    }
    // 500 * 0.02 = 10 rad, past 2pi
    assert_angles(&render_loop, frames as f64 * 0.02);
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut render_loop = RenderLoop::new(16, 16);
    render_loop.select("cube");
    for _ in 0..3 {
        render_loop.frame();
    }
    render_loop.pause();
    for _ in 0..10 {
        render_loop.frame();
    }
    assert_angles(&render_loop, 3.0 * 0.02);
    assert_eq!(render_loop.frames_rendered(), 13);
    assert!(render_loop.active_shape().is_some());

    render_loop.resume();
    render_loop.frame();
    assert_angles(&render_loop, 4.0 * 0.02);
}

#[test]
fn reset_zeroes_angles_and_resumes() {
    let mut render_loop = RenderLoop::new(16, 16);
    render_loop.select("tetrahedron");
    for _ in 0..7 {
        render_loop.frame();
    }
    render_loop.pause();
    render_loop.reset();
    assert_eq!(render_loop.rotation().angles, [0.0; 3]);
    assert!(!render_loop.rotation().paused);

    render_loop.frame();
    assert_angles(&render_loop, ROTATION_SPEED);
}

#[test]
fn returning_to_selection_clears_shape_and_text() {
    let mut render_loop = RenderLoop::new(16, 16);
    render_loop.select("dodecahedron");
    render_loop.return_to_selection();

    assert!(render_loop.active_shape().is_none());
    assert_eq!(render_loop.screen(), Screen::Selection);
    let panels = render_loop.panels();
    assert!(panels.controls && panels.project_name);
    assert!(!panels.return_button && !panels.animation_controls && !panels.shape_details);
    assert!(panels.shape_title.is_empty());
    assert!(panels.shape_description.is_empty());

    // a second return is a silent no-op
    render_loop.return_to_selection();
    assert!(render_loop.active_shape().is_none());
}

#[test]
fn active_shape_is_drawn_in_the_middle() {
    let mut render_loop = RenderLoop::new(64, 64);
    render_loop.frame();
    assert!(render_loop
        .framebuffer()
        .pixels()
        .iter()
        .all(|&p| p == Rgb::WHITE));

    render_loop.select("cube");
    render_loop.frame();
    let frame = render_loop.framebuffer();
    let centre = frame.pixel(32, 32).unwrap();
    assert_ne!(centre, Rgb::WHITE);
    // corners stay at the clear colour
    assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE));
    assert_eq!(frame.pixel(63, 63), Some(Rgb::WHITE));
}

#[test]
fn resize_updates_camera_and_framebuffer() {
    let mut render_loop = RenderLoop::new(40, 40);
    render_loop.resize(120, 60);
    assert!((render_loop.camera().aspect - 2.0).abs() < 1e-12);
    let frame = render_loop.framebuffer();
    assert_eq!((frame.width(), frame.height()), (120, 60));

    render_loop.select("torus");
    render_loop.frame();
    assert_eq!(render_loop.framebuffer().pixels().len(), 120 * 60);
}

#[test]
fn reset_after_returning_to_selection_zeroes_angles() {
    let mut render_loop = RenderLoop::new(16, 16);
    render_loop.select("cube");
    for _ in 0..10 {
        render_loop.frame();
    }
    render_loop.return_to_selection();
    assert_eq!(render_loop.rotation().angles, [0.0; 3]);

    render_loop.reset();
    assert_eq!(render_loop.rotation().angles, [0.0; 3]);
    assert!(!render_loop.rotation().paused);
}
