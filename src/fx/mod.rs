//! DOM-side effects
//!
//! One module per effect. Each installs into the live document and returns
//! an owning handle; dropping the handle detaches its listeners, timers and
//! nodes, so a single-page host can tear the whole installation down.

pub mod anchors;
pub mod counter;
pub mod glow;
pub mod hue;
pub mod page;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod tilt;
