//! CPU side of the vertex shader math.
//!
//! The GPU evaluates the same formulas in [`crate::shaders::VERTEX`]; these
//! functions exist so the animation can be reasoned about and tested off the
//! GPU. Keep the two in sync.

/// Seconds in a day.
pub const DAY_SECONDS: f64 = 86_400.0;

/// Time (seconds) at which points start leaving the grid.
pub const EASE_START: f32 = 3.0;
/// Time (seconds) at which points have fully joined the curve.
pub const EASE_END: f32 = 10.0;

/// Smallest point size, reached at the grid's origin corner.
pub const MIN_POINT_SIZE: f32 = 3.0;
/// Brightness of the dimmest point before clamping.
pub const MIN_WEIGHT: f32 = 0.1;

/// Hermite interpolation with GLSL `smoothstep` semantics.
///
/// `edge0 > edge1` is allowed and yields a falling ramp.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

pub fn mix2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [mix(a[0], b[0], t), mix(a[1], b[1], t)]
}

/// The two Laposky oscillograms blended across the grid's y axis.
pub fn laposky(x: f32) -> ([f32; 2], [f32; 2]) {
    let wave = |f0: f32, f1: f32| (x * f0).sin() * 0.5 + (x * f1).sin() * 0.5;
    let a = [wave(0.3, 0.8), wave(0.7, 0.1)];
    let b = [wave(0.5, 0.4), wave(0.2, 0.9)];
    (a, b)
}

/// Offset that ties the animation phase to the time of day.
///
/// Maps `now_seconds` (Unix epoch) into `[-43200, 43200)`.
pub fn day_offset(now_seconds: f64) -> f32 {
    (now_seconds.rem_euclid(DAY_SECONDS) - DAY_SECONDS / 2.0) as f32
}

/// Output of the vertex stage for a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointState {
    /// Clip-space position.
    pub position: [f32; 2],
    /// `gl_PointSize` in device pixels.
    pub size: f32,
    /// Color multiplier in [0,1].
    pub weight: f32,
}

/// Evaluates the vertex shader for grid coordinate `pos`.
pub fn point_state(pos: [f32; 2], t: f32, offset: f32, scale: f32) -> PointState {
    let grid = [(pos[0] - 0.5) * 2.0, (pos[1] - 0.5) * 2.0];
    let x = offset + t + pos[0] * 10.0;
    let (a, b) = laposky(x);
    let p = mix2(a, b, pos[1]);
    let corner = pos[0] * pos[1];

    PointState {
        position: mix2(grid, p, smoothstep(EASE_START, EASE_END, t)),
        size: mix(MIN_POINT_SIZE, scale, corner),
        weight: mix(MIN_WEIGHT, scale, corner).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-5 && (a[1] - b[1]).abs() < 1e-5
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(3.0, 10.0, 0.0), 0.0);
        assert_eq!(smoothstep(3.0, 10.0, 10.0), 1.0);
        assert!((smoothstep(3.0, 10.0, 6.5) - 0.5).abs() < 1e-6);
        // falling ramp as used by the fragment antialiasing
        assert_eq!(smoothstep(1.0, 0.9, 0.5), 1.0);
        assert_eq!(smoothstep(1.0, 0.9, 1.5), 0.0);
    }

    #[test]
    fn points_start_on_the_grid() {
        let s = point_state([0.25, 0.75], 2.0, 1234.0, 10.0);
        assert!(close(s.position, [-0.5, 0.5]));
    }

    #[test]
    fn points_end_on_the_curve() {
        let pos = [0.4, 0.6];
        let (t, offset) = (12.0, -300.0);
        let (a, b) = laposky(offset + t + pos[0] * 10.0);
        let s = point_state(pos, t, offset, 10.0);
        assert!(close(s.position, mix2(a, b, pos[1])));
    }

    #[test]
    fn curve_stays_in_clip_space() {
        for i in 0..500 {
            let (a, b) = laposky(i as f32 * 0.37 - 90.0);
            for v in a.into_iter().chain(b) {
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn size_and_weight_grow_toward_far_corner() {
        let origin = point_state([0.0, 0.0], 0.0, 0.0, 20.0);
        let far = point_state([1.0, 1.0], 0.0, 0.0, 20.0);
        assert_eq!(origin.size, MIN_POINT_SIZE);
        assert_eq!(far.size, 20.0);
        assert!((origin.weight - MIN_WEIGHT).abs() < 1e-6);
        assert_eq!(far.weight, 1.0);
    }

    #[test]
    fn day_offset_is_centered_on_noon() {
        assert_eq!(day_offset(0.0), -43_200.0);
        assert_eq!(day_offset(43_200.0), 0.0);
        assert_eq!(day_offset(DAY_SECONDS * 3.0 + 60.0), -43_140.0);
        let now = 1_760_000_000.5;
        let off = day_offset(now);
        assert!((-43_200.0..43_200.0).contains(&off));
    }
}
