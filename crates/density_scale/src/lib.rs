//! Density scale custom properties for the document root.
//!
//! On page load the scaler reads the device pixel ratio and writes two custom
//! properties onto the root element's inline style:
//!
//! - `--px-per-dp`: physical pixels per density-independent pixel, `ratio * 96 / 160`
//! - `--px-per-sp`: physical pixels per scale-independent pixel, `ratio * 96 / 96`
//!
//! Stylesheets then size things with `calc(16 * var(--px-per-dp))`. The ratio source
//! and the root style are passed in, so nothing here touches a global document.

#![forbid(unsafe_code)]

pub mod config;
pub mod ratio;
pub mod root_style;
pub mod scaler;

pub use config::{PX_PER_DP_PROPERTY, PX_PER_SP_PROPERTY, ScaleConfig};
pub use ratio::{FixedPixelRatio, MissingRatioPolicy, PixelRatioSource, RatioError};
pub use root_style::{InlineRootStyle, RootStyle, set_root_property};
pub use scaler::DensityScaler;

pub use css_values_units::{DP_PER_INCH, DensityScale, DevicePixelRatio, SP_PER_INCH};
