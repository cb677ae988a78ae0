/// Quadratic ease-in-ease-out over `t` in `[0, 1]`, clamped outside.
///
/// Matches the `power2.inOut` curve of the page's tween library: slow
/// start, slow settle, symmetric around the midpoint.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
