//! Responsive backdrop zoom
//!
//! Narrow viewports need a much larger zoom to keep the video covering the
//! screen without letterboxing; wide viewports need almost none. The
//! mapping is a clamped linear interpolation between the two reference
//! widths.

use crate::debounce::Debouncer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

const MIN_WIDTH: f64 = 375.0;
const MAX_WIDTH: f64 = 1850.0;
const MIN_ZOOM: f64 = 1.2;
const MAX_ZOOM: f64 = 3.4;

/// Settle time for bursts of viewport resize events
const RESIZE_QUIET: Duration = Duration::from_millis(100);

/// Zoom factor for a viewport width, decreasing linearly from 3.4 at
/// 375px and below to 1.2 at 1850px and above.
pub fn zoom_for_width(width: f64) -> f64 {
    if width >= MAX_WIDTH {
        return MIN_ZOOM;
    }
    if width <= MIN_WIDTH {
        return MAX_ZOOM;
    }
    MAX_ZOOM - ((width - MIN_WIDTH) / (MAX_WIDTH - MIN_WIDTH)) * (MAX_ZOOM - MIN_ZOOM)
}

/// Continuously updated zoom driven by debounced resize events
///
/// The initial zoom is computed immediately; later viewport changes go
/// through a quiet-period debounce so a drag-resize burst produces one
/// recomputation, not hundreds. Dropping this cancels any pending update.
pub struct ResponsiveZoom {
    zoom_bits: Arc<AtomicU64>,
    width_bits: Arc<AtomicU64>,
    debouncer: Debouncer,
}

impl ResponsiveZoom {
    pub fn new(initial_width: f64) -> Self {
        let zoom_bits = Arc::new(AtomicU64::new(zoom_for_width(initial_width).to_bits()));
        let width_bits = Arc::new(AtomicU64::new(initial_width.to_bits()));

        let zoom = Arc::clone(&zoom_bits);
        let width = Arc::clone(&width_bits);
        let debouncer = Debouncer::new(RESIZE_QUIET, move || {
            let current = f64::from_bits(width.load(Ordering::SeqCst));
            zoom.store(zoom_for_width(current).to_bits(), Ordering::SeqCst);
        });

        Self {
            zoom_bits,
            width_bits,
            debouncer,
        }
    }

    /// Record a viewport width change; the zoom updates once the burst
    /// settles.
    pub fn viewport_resized(&self, width: f64) {
        self.width_bits.store(width.to_bits(), Ordering::SeqCst);
        self.debouncer.signal();
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        f64::from_bits(self.zoom_bits.load(Ordering::SeqCst))
    }
}
