//! Density-independent (`dp`) and scale-independent (`sp`) pixel scales.
//!
//! Both scales are derived from the device pixel ratio. A CSS pixel is defined as
//! 1/96 inch, so `ratio * 96` is the number of physical pixels per inch; dividing by
//! the reference density of a unit yields physical pixels per unit.

use core::fmt;

/// Reference density for `dp`: density-independent pixels per inch.
pub const DP_PER_INCH: f64 = 160.0;

/// Reference density for `sp`: scale-independent pixels per inch.
pub const SP_PER_INCH: f64 = 96.0;

/// CSS pixels per inch, fixed by CSS Values §6.2 (absolute lengths).
pub const CSS_PX_PER_INCH: f64 = 96.0;

/// Physical pixels per CSS pixel as reported by the display environment.
///
/// Construction through [`DevicePixelRatio::new`] guarantees a finite, positive value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DevicePixelRatio(f64);

impl DevicePixelRatio {
    /// The ratio of a standard-density display.
    pub const ONE: Self = Self(1.0);

    /// Wrap a raw ratio, rejecting zero, negative, and non-finite readings.
    #[inline]
    #[must_use]
    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// The raw ratio.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Physical pixels per inch at this ratio.
    #[inline]
    #[must_use]
    pub fn physical_px_per_inch(self) -> f64 {
        self.0 * CSS_PX_PER_INCH
    }
}

impl Default for DevicePixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for DevicePixelRatio {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Physical pixels per `dp` for a raw device pixel ratio and reference density.
///
/// No validation is done here; a degenerate ratio yields a degenerate factor.
#[inline]
#[must_use]
pub fn px_per_dp(ratio: f64, dp_per_inch: f64) -> f64 {
    (ratio * CSS_PX_PER_INCH) / dp_per_inch
}

/// Physical pixels per `sp` for a raw device pixel ratio and reference density.
#[inline]
#[must_use]
pub fn px_per_sp(ratio: f64, sp_per_inch: f64) -> f64 {
    (ratio * CSS_PX_PER_INCH) / sp_per_inch
}

/// Both derived scale factors for one device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityScale {
    /// Physical pixels per density-independent pixel.
    pub px_per_dp: f64,
    /// Physical pixels per scale-independent pixel.
    pub px_per_sp: f64,
}

impl DensityScale {
    /// Derive both factors using the reference densities [`DP_PER_INCH`] and [`SP_PER_INCH`].
    #[inline]
    #[must_use]
    pub fn from_ratio(ratio: DevicePixelRatio) -> Self {
        Self::with_reference(ratio, DP_PER_INCH, SP_PER_INCH)
    }

    /// Derive both factors against explicit reference densities.
    #[inline]
    #[must_use]
    pub fn with_reference(ratio: DevicePixelRatio, dp_per_inch: f64, sp_per_inch: f64) -> Self {
        Self {
            px_per_dp: px_per_dp(ratio.get(), dp_per_inch),
            px_per_sp: px_per_sp(ratio.get(), sp_per_inch),
        }
    }
}

impl Default for DensityScale {
    fn default() -> Self {
        Self::from_ratio(DevicePixelRatio::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_ratios() {
        for (ratio, dp, sp) in [(1.0, 0.6, 1.0), (2.0, 1.2, 2.0), (1.5, 0.9, 1.5)] {
            assert_close(px_per_dp(ratio, DP_PER_INCH), dp);
            assert_close(px_per_sp(ratio, SP_PER_INCH), sp);
        }
    }

    #[test]
    fn sp_tracks_ratio() {
        for ratio in [0.5, 1.0, 1.25, 2.625, 3.0, 4.0] {
            assert_close(px_per_sp(ratio, SP_PER_INCH), ratio);
        }
    }

    #[test]
    fn rejects_degenerate_ratios() {
        assert!(DevicePixelRatio::new(0.0).is_none());
        assert!(DevicePixelRatio::new(-1.0).is_none());
        assert!(DevicePixelRatio::new(f64::NAN).is_none());
        assert!(DevicePixelRatio::new(f64::INFINITY).is_none());
        assert_eq!(DevicePixelRatio::new(1.75).map(DevicePixelRatio::get), Some(1.75));
    }

    #[test]
    fn default_scale_is_standard_density() {
        let scale = DensityScale::default();
        assert_close(scale.px_per_dp, 0.6);
        assert_close(scale.px_per_sp, 1.0);
    }
}
