//! Sketch presets and typing-effect settings.
//!
//! Everything here is fixed at compile time. The host page picks a preset
//! through `data-*` attributes on the target elements.

use std::fmt;
use std::str::FromStr;

use crate::error::FxError;

/// Id of the canvas element the point-grid sketch renders into.
pub const CANVAS_ID: &str = "sketch";

/// Class that marks an element as a typewriter target.
pub const MARKER_CLASS: &str = "typed";

/// Delay between two revealed characters, in milliseconds.
pub const CHAR_DELAY_MS: u32 = 30;

/// Attribute on the canvas that selects a [`SketchVariant`].
pub const VARIANT_ATTR: &str = "data-variant";

/// Attribute on a typed element that selects a [`RevealMode`].
pub const REVEAL_ATTR: &str = "data-reveal";

/// Options handed to `canvas.getContext("webgl", ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    pub alpha: bool,
    pub antialias: bool,
    pub depth: bool,
    pub stencil: bool,
    pub premultiplied_alpha: bool,
}

impl ContextOptions {
    /// Key/value pairs using the WebGL context attribute names.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("alpha", self.alpha),
            ("antialias", self.antialias),
            ("depth", self.depth),
            ("stencil", self.stencil),
            ("premultipliedAlpha", self.premultiplied_alpha),
        ]
    }
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            alpha: true,
            antialias: false,
            depth: false,
            stencil: false,
            premultiplied_alpha: false,
        }
    }
}

/// The standalone point-grid sketches shipped with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchVariant {
    /// Full-page field of Laposky curves.
    #[default]
    Laposky,
    /// Finer grid with smaller points, hardware antialiasing on.
    Dense,
    /// Coarse grid of large dots over a premultiplied canvas.
    Sparse,
}

impl SketchVariant {
    pub const ALL: [SketchVariant; 3] = [Self::Laposky, Self::Dense, Self::Sparse];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Laposky => "laposky",
            Self::Dense => "dense",
            Self::Sparse => "sparse",
        }
    }
}

impl fmt::Display for SketchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SketchVariant {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FxError::UnknownVariant(wanted.to_string()))
    }
}

/// Geometry and context settings for one sketch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchConfig {
    /// Points along x (`m`).
    pub columns: u32,
    /// Points along y (`n`).
    pub rows: u32,
    /// Largest point size in CSS pixels; scaled by the device pixel ratio.
    pub scale: f32,
    pub context: ContextOptions,
}

impl SketchConfig {
    pub fn for_variant(variant: SketchVariant) -> Self {
        let base = ContextOptions::default();
        match variant {
            SketchVariant::Laposky => Self {
                columns: 115,
                rows: 67,
                scale: 10.0,
                context: base,
            },
            SketchVariant::Dense => Self {
                columns: 160,
                rows: 90,
                scale: 6.0,
                context: ContextOptions {
                    antialias: true,
                    ..base
                },
            },
            SketchVariant::Sparse => Self {
                columns: 48,
                rows: 27,
                scale: 18.0,
                context: ContextOptions {
                    premultiplied_alpha: true,
                    ..base
                },
            },
        }
    }

    /// Number of points the sketch draws each frame.
    pub fn point_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::for_variant(SketchVariant::default())
    }
}

/// How a typed element is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Rewrite the element's `innerText`; markup inside is flattened.
    #[default]
    Flat,
    /// Walk descendant text nodes and keep the element's markup intact.
    Tree,
}

impl FromStr for RevealMode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "flat" => Ok(Self::Flat),
            "tree" => Ok(Self::Tree),
            other => Err(FxError::UnknownRevealMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConfig {
    pub marker_class: &'static str,
    pub delay_ms: u32,
    /// Mode used when an element carries no `data-reveal` attribute.
    pub mode: RevealMode,
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self {
            marker_class: MARKER_CLASS,
            delay_ms: CHAR_DELAY_MS,
            mode: RevealMode::Flat,
        }
    }
}
