//! GLSL ES 1.00 sources for the point-grid sketches.
//!
//! The vertex stage mirrors [`crate::curve::point_state`].

/// Blends the static grid into a pair of Laposky curves.
pub const VERTEX: &str = r#"
attribute vec2 pos;
uniform float scale;
uniform float offset;
uniform float t;
varying float weight;
void main() {
    vec2 grid = (pos - 0.5) * 2.0;
    float x = offset + t + pos.x * 10.0;
    vec2 a = vec2(sin(x * 0.3) * 0.5 + sin(x * 0.8) * 0.5, sin(x * 0.7) * 0.5 + sin(x * 0.1) * 0.5);
    vec2 b = vec2(sin(x * 0.5) * 0.5 + sin(x * 0.4) * 0.5, sin(x * 0.2) * 0.5 + sin(x * 0.9) * 0.5);
    vec2 p = mix(a, b, pos.y);
    gl_PointSize = mix(3.0, scale, pos.y * pos.x);
    weight = clamp(mix(0.1, scale, pos.y * pos.x), 0.0, 1.0);
    gl_Position = vec4(mix(grid, p, smoothstep(3.0, 10.0, t)), 0.0, 1.0);
}
"#;

/// Antialiased round points; falls back to hard edges without `fwidth`.
pub const FRAGMENT: &str = r#"
#ifdef GL_OES_standard_derivatives
#extension GL_OES_standard_derivatives : enable
#endif
precision mediump float;
uniform vec4 color;
uniform vec2 res;
varying float weight;
void main() {
    vec2 cxy = (gl_PointCoord - 0.5) * 2.0;
    float r = dot(cxy, cxy);
#ifdef GL_OES_standard_derivatives
    float delta = fwidth(r);
    float alpha = smoothstep(1.0, 1.0 - delta, r);
    gl_FragColor = vec4(color.rgb * weight, color.a * alpha);
    gl_FragColor.rgb *= gl_FragColor.a;
#else
    if (r > 1.0) discard;
    gl_FragColor = vec4(color.rgba);
#endif
}
"#;

pub const ATTR_POS: &str = "pos";

pub const U_SCALE: &str = "scale";
pub const U_OFFSET: &str = "offset";
pub const U_TIME: &str = "t";
pub const U_COLOR: &str = "color";
pub const U_RES: &str = "res";
