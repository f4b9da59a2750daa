//! Device pixel ratio input and the policy for unusable readings.

use core::error::Error;
use core::fmt;

use css_values_units::DevicePixelRatio;
use log::warn;

/// Supplies the ambient device pixel ratio.
///
/// The document's window implements this in a live page; tests pass a fixed value.
/// `None` means the signal is unavailable.
pub trait PixelRatioSource {
    /// Current physical pixels per CSS pixel.
    fn device_pixel_ratio(&self) -> Option<f64>;
}

/// A source that always reports the same ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPixelRatio(pub f64);

impl PixelRatioSource for FixedPixelRatio {
    #[inline]
    fn device_pixel_ratio(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl<F> PixelRatioSource for F
where
    F: Fn() -> Option<f64>,
{
    #[inline]
    fn device_pixel_ratio(&self) -> Option<f64> {
        self()
    }
}

/// What to do when the ratio is missing, zero, negative, or not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MissingRatioPolicy {
    /// Substitute this ratio and log a warning.
    Fallback(DevicePixelRatio),
    /// Fail the operation with a [`RatioError`].
    Reject,
}

impl Default for MissingRatioPolicy {
    fn default() -> Self {
        Self::Fallback(DevicePixelRatio::ONE)
    }
}

impl MissingRatioPolicy {
    /// Turn a raw reading into a usable ratio.
    ///
    /// # Errors
    /// Under [`MissingRatioPolicy::Reject`], returns [`RatioError::Unavailable`] for a
    /// missing reading and [`RatioError::Invalid`] for a degenerate one.
    pub fn resolve(self, reading: Option<f64>) -> Result<DevicePixelRatio, RatioError> {
        let error = match reading {
            Some(raw) => match DevicePixelRatio::new(raw) {
                Some(ratio) => return Ok(ratio),
                None => RatioError::Invalid(raw),
            },
            None => RatioError::Unavailable,
        };
        match self {
            Self::Fallback(ratio) => {
                warn!("{error}; falling back to device pixel ratio {ratio}");
                Ok(ratio)
            }
            Self::Reject => Err(error),
        }
    }
}

/// Reasons a device pixel ratio reading could not be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RatioError {
    /// The environment reported no ratio.
    Unavailable,
    /// The environment reported zero, a negative value, or a non-finite value.
    Invalid(f64),
}

impl fmt::Display for RatioError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(formatter, "device pixel ratio is unavailable"),
            Self::Invalid(raw) => write!(formatter, "device pixel ratio {raw} is not usable"),
        }
    }
}

impl Error for RatioError {}
