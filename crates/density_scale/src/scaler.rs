//! Computes dp/sp scale factors from the device pixel ratio and writes them to the root.

use anyhow::Result;
use css_values_units::{DensityScale, DevicePixelRatio, px_per_dp, px_per_sp};
use log::debug;

use crate::config::ScaleConfig;
use crate::ratio::{PixelRatioSource, RatioError};
use crate::root_style::{RootStyle, set_root_property};

/// Derives `--px-per-dp` and `--px-per-sp` from an injected pixel ratio source.
///
/// The ratio is read on every call; nothing is cached between operations.
#[derive(Clone, Debug)]
pub struct DensityScaler<S> {
    source: S,
    config: ScaleConfig,
}

impl<S: PixelRatioSource> DensityScaler<S> {
    /// Create a scaler with the reference configuration.
    #[inline]
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, ScaleConfig::default())
    }

    /// Create a scaler with an explicit configuration.
    #[inline]
    #[must_use]
    pub const fn with_config(source: S, config: ScaleConfig) -> Self {
        Self { source, config }
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Read the ratio and apply the missing-ratio policy.
    ///
    /// # Errors
    /// Returns [`RatioError`] when the reading is unusable and the policy rejects it.
    pub fn device_pixel_ratio(&self) -> Result<DevicePixelRatio, RatioError> {
        self.config
            .missing_ratio
            .resolve(self.source.device_pixel_ratio())
    }

    /// Physical pixels per dp: `ratio * 96 / dp_per_inch`.
    ///
    /// # Errors
    /// See [`DensityScaler::device_pixel_ratio`].
    pub fn dp_scale(&self) -> Result<f64, RatioError> {
        let ratio = self.device_pixel_ratio()?;
        Ok(px_per_dp(ratio.get(), self.config.dp_per_inch))
    }

    /// Physical pixels per sp: `ratio * 96 / sp_per_inch`.
    ///
    /// # Errors
    /// See [`DensityScaler::device_pixel_ratio`].
    pub fn sp_scale(&self) -> Result<f64, RatioError> {
        let ratio = self.device_pixel_ratio()?;
        Ok(px_per_sp(ratio.get(), self.config.sp_per_inch))
    }

    /// Both factors from a single ratio reading.
    ///
    /// # Errors
    /// See [`DensityScaler::device_pixel_ratio`].
    pub fn scale(&self) -> Result<DensityScale, RatioError> {
        let ratio = self.device_pixel_ratio()?;
        Ok(DensityScale::with_reference(
            ratio,
            self.config.dp_per_inch,
            self.config.sp_per_inch,
        ))
    }

    /// Compute the dp factor and write it to the dp property on `root`.
    ///
    /// # Errors
    /// Fails when the ratio is rejected or the root refuses the write.
    pub fn apply_dp_scale<R>(&self, root: &mut R) -> Result<()>
    where
        R: RootStyle + ?Sized,
    {
        let factor = self.dp_scale()?;
        set_root_property(root, &self.config.dp_property, factor)
    }

    /// Compute the sp factor and write it to the sp property on `root`.
    ///
    /// # Errors
    /// Fails when the ratio is rejected or the root refuses the write.
    pub fn apply_sp_scale<R>(&self, root: &mut R) -> Result<()>
    where
        R: RootStyle + ?Sized,
    {
        let factor = self.sp_scale()?;
        set_root_property(root, &self.config.sp_property, factor)
    }

    /// Page-load initialization: dp first, then sp. Stops at the first failure.
    ///
    /// # Errors
    /// Returns the first failure from [`DensityScaler::apply_dp_scale`] or
    /// [`DensityScaler::apply_sp_scale`].
    pub fn install<R>(&self, root: &mut R) -> Result<()>
    where
        R: RootStyle + ?Sized,
    {
        self.apply_dp_scale(root)?;
        self.apply_sp_scale(root)?;
        debug!("density scale installed on document root");
        Ok(())
    }
}
