//! Derived presentation styling for the backdrop
//!
//! Pure computation from declarative parameters to CSS-ready values.
//! Recomputed whenever an input changes; nothing here is cached.

/// CSS-ready style values for the backdrop video element
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropStyle {
    /// Visual scale factor (the zoom)
    pub scale: f64,
    /// Brightness percentage after darkening
    pub brightness_pct: f64,
    /// `transform` value: centered translate plus scale
    pub transform: String,
    /// `filter` value: brightness, plus grayscale (retro) and
    /// contrast/saturation boost (scanlines)
    pub filter: String,
}

/// Compute the backdrop style.
///
/// `darken` is a percentage in `[0, 100]`; out-of-range values are clamped
/// rather than rejected. Retro applies full grayscale; scanlines add a
/// contrast and saturation boost to sell the CRT look.
pub fn backdrop_style(zoom: f64, darken: f64, retro: bool, scanlines: bool) -> BackdropStyle {
    let darken = darken.clamp(0.0, 100.0);
    let brightness_pct = 100.0 - darken;

    let mut filter = format!("brightness({}%)", brightness_pct);
    if retro {
        filter.push_str(" grayscale(100%)");
    }
    if scanlines {
        filter.push_str(" contrast(1.1) saturate(1.2)");
    }

    BackdropStyle {
        scale: zoom,
        brightness_pct,
        transform: format!("translate(-50%, -50%) scale({})", zoom),
        filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style() {
        let style = backdrop_style(1.2, 0.0, false, false);
        assert_eq!(style.scale, 1.2);
        assert_eq!(style.brightness_pct, 100.0);
        assert_eq!(style.transform, "translate(-50%, -50%) scale(1.2)");
        assert_eq!(style.filter, "brightness(100%)");
    }

    #[test]
    fn test_darken_reduces_brightness() {
        let style = backdrop_style(1.0, 30.0, false, false);
        assert_eq!(style.brightness_pct, 70.0);
        assert_eq!(style.filter, "brightness(70%)");
    }

    #[test]
    fn test_darken_is_clamped() {
        assert_eq!(backdrop_style(1.0, 150.0, false, false).brightness_pct, 0.0);
        assert_eq!(
            backdrop_style(1.0, -20.0, false, false).brightness_pct,
            100.0
        );
    }

    #[test]
    fn test_retro_adds_grayscale() {
        let style = backdrop_style(1.0, 0.0, true, false);
        assert_eq!(style.filter, "brightness(100%) grayscale(100%)");
    }

    #[test]
    fn test_scanlines_add_contrast_and_saturation() {
        let style = backdrop_style(1.0, 0.0, false, true);
        assert_eq!(style.filter, "brightness(100%) contrast(1.1) saturate(1.2)");
    }

    #[test]
    fn test_retro_and_scanlines_compose() {
        let style = backdrop_style(2.0, 40.0, true, true);
        assert_eq!(
            style.filter,
            "brightness(60%) grayscale(100%) contrast(1.1) saturate(1.2)"
        );
    }
}
