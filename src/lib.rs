//! Decorative effects for a personal site: a typewriter text reveal and
//! animated WebGL point-grid sketches.
//!
//! The math and scheduling live in plain modules so they build and test on
//! the host. Browser bindings are only compiled for wasm32.

pub mod config;
pub mod curve;
pub mod error;
pub mod grid;
pub mod shaders;
pub mod typewriter;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{RevealMode, SketchConfig, SketchVariant, TypeConfig};
pub use error::FxError;
pub use grid::PointGrid;
