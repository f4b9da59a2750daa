//! The document root's styling context and the custom property setter.

use anyhow::{Context as _, Result, bail};
use css_variables::{
    CustomProperties, is_custom_property_name, normalize_custom_property_name, serialize_number,
};
use log::debug;

/// Inline style of the document's root element (`<html>`).
///
/// The host document owns it; the scaler only writes through it.
pub trait RootStyle {
    /// Set a property on the root element's inline style.
    ///
    /// # Errors
    /// Returns an error when the host rejects the name or value, or has no root element.
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;

    /// Read back a property previously set on the root element.
    fn property(&self, name: &str) -> Option<&str>;
}

/// Set a custom property on the root, prefixing `name` with `--` if it lacks it.
///
/// `value` is not checked for being finite or non-negative.
///
/// # Errors
/// Propagates any failure from [`RootStyle::set_property`], annotated with the property name.
pub fn set_root_property<R>(root: &mut R, name: &str, value: f64) -> Result<()>
where
    R: RootStyle + ?Sized,
{
    let property = normalize_custom_property_name(name);
    let text = serialize_number(value);
    debug!("setting {property}: {text} on document root");
    root.set_property(&property, &text)
        .with_context(|| format!("failed to set {property} on document root"))
}

/// In-memory root inline style holding custom properties only.
///
/// Stands in for the live document in tests and headless hosts. Its serialized form
/// is what the root element's `style` attribute reads after the writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineRootStyle {
    properties: CustomProperties,
}

impl InlineRootStyle {
    /// Create an empty root style.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: CustomProperties::new(),
        }
    }

    /// All custom properties set so far.
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> &CustomProperties {
        &self.properties
    }

    /// The `style` attribute text, e.g. `--px-per-dp: 0.6; --px-per-sp: 1`.
    #[inline]
    #[must_use]
    pub fn to_style_attribute(&self) -> String {
        self.properties.to_declaration_block()
    }
}

impl RootStyle for InlineRootStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        if !is_custom_property_name(name) {
            bail!("{name:?} is not a valid custom property name");
        }
        self.properties.set(name, value);
        Ok(())
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }
}
