use dynamic_notch::animation::Easing;
use dynamic_notch::geometry::{compute_rects, window_frame};
use dynamic_notch::{clamp, lerp, ExpansionState, Rect};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn lerp_endpoints() {
    assert!(approx_eq(lerp(200.0, 700.0, 0.0), 200.0));
    assert!(approx_eq(lerp(200.0, 700.0, 1.0), 700.0));
    assert!(approx_eq(lerp(200.0, 700.0, 0.5), 450.0));
}

#[test]
fn ease_in_out_is_slow_at_both_ends() {
    let e = Easing::EaseInEaseOut;
    assert!(e.apply(0.1) < 0.1);
    assert!(e.apply(0.9) > 0.9);
    assert!(approx_eq(e.apply(0.5), 0.5));
}

#[test]
fn geometry_holds_on_arranged_displays() {
    let frames = [
        Rect::new(0.0, 0.0, 1512.0, 982.0),
        Rect::new(1512.0, 0.0, 2560.0, 1440.0),
        Rect::new(-1920.0, -300.0, 1920.0, 1080.0),
        Rect::new(0.0, 982.0, 1280.0, 800.0),
    ];
    for f in frames {
        let g = compute_rects(&f, ExpansionState::Collapsed);
        assert!(g.expanded_rect.contains_rect(&g.trigger_rect), "{f:?}");
        assert!(approx_eq(g.trigger_rect.max_y(), f.max_y()));
        assert!(approx_eq(g.trigger_rect.mid_x(), f.mid_x()));

        for s in [ExpansionState::Collapsed, ExpansionState::Expanded] {
            let w = window_frame(&f, s);
            assert!(approx_eq(w.max_y(), f.max_y()));
            assert!(approx_eq(w.mid_x(), f.mid_x()));
        }
    }
}
