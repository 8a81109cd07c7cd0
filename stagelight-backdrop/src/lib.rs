//! # Stagelight Backdrop Library
//!
//! Everything behind the full-screen video backdrop:
//! - `Video` descriptors and the built-in rotation catalog
//! - The rotation state machine (`Rotator`) and its async driver
//! - Derived presentation styling (zoom/darken/retro/scanlines)
//! - Responsive zoom with a debounced resize path

pub mod catalog;
pub mod debounce;
pub mod driver;
pub mod rotator;
pub mod style;
pub mod video;
pub mod zoom;

pub use debounce::Debouncer;
pub use driver::{PlayerControl, RotatorDriver, RotatorHandle};
pub use rotator::{PlaybackParams, RotationSource, Rotator, TickEffect, DEFAULT_INTERVAL_SECS};
pub use style::{backdrop_style, BackdropStyle};
pub use video::Video;
pub use zoom::{zoom_for_width, ResponsiveZoom};
