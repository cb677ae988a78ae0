use veil_core::math::ease_in_out_quad;

#[test]
fn test_ease_endpoints() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
}

#[test]
fn test_ease_midpoint() {
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn test_ease_monotone() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=100 {
        let value = ease_in_out_quad(i as f32 / 100.0);
        assert!(
            value >= prev,
            "easing not monotone at t = {}: {} < {}",
            i as f32 / 100.0,
            value,
            prev
        );
        prev = value;
    }
}

#[test]
fn test_ease_symmetric_about_midpoint() {
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let sum = ease_in_out_quad(t) + ease_in_out_quad(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-5, "asymmetric at t = {}: {}", t, sum);
    }
}

#[test]
fn test_ease_clamps_out_of_range_input() {
    assert_eq!(ease_in_out_quad(-1.0), 0.0);
    assert_eq!(ease_in_out_quad(2.0), 1.0);
}
