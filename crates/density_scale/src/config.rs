//! Reference densities and target property names for the density scaler.
//!
//! Configuration is built in code only. The defaults are the fixed reference values
//! that stylesheets are written against; changing them changes the meaning of every
//! `dp`/`sp` length on the page.

use css_values_units::{DP_PER_INCH, DevicePixelRatio, SP_PER_INCH};

use crate::ratio::MissingRatioPolicy;

/// Custom property receiving physical pixels per `dp`.
pub const PX_PER_DP_PROPERTY: &str = "--px-per-dp";

/// Custom property receiving physical pixels per `sp`.
pub const PX_PER_SP_PROPERTY: &str = "--px-per-sp";

/// Settings for a [`DensityScaler`](crate::DensityScaler).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Reference density-independent pixels per inch.
    pub dp_per_inch: f64,
    /// Reference scale-independent pixels per inch.
    pub sp_per_inch: f64,
    /// Property written by the dp operation.
    pub dp_property: String,
    /// Property written by the sp operation.
    pub sp_property: String,
    /// Handling of missing or degenerate ratio readings.
    pub missing_ratio: MissingRatioPolicy,
}

impl ScaleConfig {
    /// Construct a config with explicit reference densities.
    ///
    /// Densities that are zero, negative, or not finite are replaced by the defaults
    /// (160 for dp, 96 for sp), so the derived factors are always finite for a valid ratio.
    #[inline]
    #[must_use]
    pub fn new(dp_per_inch: f64, sp_per_inch: f64) -> Self {
        Self {
            dp_per_inch: usable_density(dp_per_inch, DP_PER_INCH),
            sp_per_inch: usable_density(sp_per_inch, SP_PER_INCH),
            dp_property: PX_PER_DP_PROPERTY.to_owned(),
            sp_property: PX_PER_SP_PROPERTY.to_owned(),
            missing_ratio: MissingRatioPolicy::default(),
        }
    }

    /// Replace the dp and sp property names. Names without `--` are prefixed when written.
    #[inline]
    #[must_use]
    pub fn with_property_names(mut self, dp_property: &str, sp_property: &str) -> Self {
        dp_property.clone_into(&mut self.dp_property);
        sp_property.clone_into(&mut self.sp_property);
        self
    }

    /// Replace the missing-ratio policy.
    #[inline]
    #[must_use]
    pub const fn with_missing_ratio(mut self, policy: MissingRatioPolicy) -> Self {
        self.missing_ratio = policy;
        self
    }

    /// Shorthand for [`MissingRatioPolicy::Fallback`] with the given ratio.
    #[inline]
    #[must_use]
    pub const fn with_fallback_ratio(self, ratio: DevicePixelRatio) -> Self {
        self.with_missing_ratio(MissingRatioPolicy::Fallback(ratio))
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::new(DP_PER_INCH, SP_PER_INCH)
    }
}

fn usable_density(candidate: f64, default: f64) -> f64 {
    if candidate.is_finite() && candidate > 0.0 {
        candidate
    } else {
        default
    }
}
