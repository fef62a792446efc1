//! Pure math behind the effects
//!
//! Everything here is DOM-free and unit-tested natively; the wasm-only
//! `fx` modules apply these values to elements.

pub mod counter;
pub mod hue;
pub mod particle;
pub mod pointer;
pub mod scroll;

pub use hue::HueWheel;
pub use particle::ParticleParams;
pub use pointer::Tilt;
pub use scroll::Parallax;
