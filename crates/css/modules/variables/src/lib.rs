//! CSS Custom Properties for Cascading Variables Module Level 1: CSS variables.
//! Spec: <https://www.w3.org/TR/css-variables-1/>

#![forbid(unsafe_code)]

use std::borrow::Cow;

/// Prefix shared by every custom property name.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Prepend `--` to `name` unless it already starts with it.
///
/// The prefix is never doubled: `px-test` becomes `--px-test`, `--px-test` stays as-is.
/// No other validation is done, so the result may still be the reserved name `--`.
#[inline]
#[must_use]
pub fn normalize_custom_property_name(name: &str) -> Cow<'_, str> {
    if name.starts_with(CUSTOM_PROPERTY_PREFIX) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned([CUSTOM_PROPERTY_PREFIX, name].concat())
    }
}

/// Whether `name` is a usable custom property name: `--` followed by at least one
/// character. The bare `--` is reserved.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#defining-variables>
#[inline]
#[must_use]
pub fn is_custom_property_name(name: &str) -> bool {
    name.len() > CUSTOM_PROPERTY_PREFIX.len() && name.starts_with(CUSTOM_PROPERTY_PREFIX)
}

/// Serialize a number the way the page's script runtime stringifies it before handing
/// it to `style.setProperty`: integral values drop the fractional part and infinities
/// are spelled out. Covers magnitudes in `1e-6..1e21`, where both notations agree.
#[must_use]
pub fn serialize_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if value == 0.0 {
        // Negative zero stringifies as plain zero.
        return "0".to_owned();
    }
    value.to_string()
}

/// Custom properties set on one element, in first-insertion order.
///
/// Names include the leading `--`; values are the raw strings handed to the setter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomProperties {
    entries: Vec<(String, String)>,
}

impl CustomProperties {
    /// Create an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `name` to `value`. An existing entry keeps its position and is overwritten.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == name) {
            value.clone_into(&mut entry.1);
            return;
        }
        self.entries.push((name.to_owned(), value.to_owned()));
    }

    /// Look up the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1.as_str())
    }

    /// Remove `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|entry| entry.0 == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of properties set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property is set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Serialize as declaration block text, e.g. `--px-per-dp: 0.6; --px-per-sp: 1`.
    ///
    /// This is the form a `style` attribute takes after `setProperty` calls.
    #[must_use]
    pub fn to_declaration_block(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Resolve a value consisting of exactly one `var()` reference.
///
/// Accepts `var(--name)` and `var(--name, fallback)` with surrounding whitespace.
/// Returns the referenced value when set, otherwise the trimmed fallback when given,
/// otherwise `None`. Text that is not a single `var()` call is returned unchanged.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#using-variables>
#[must_use]
pub fn lookup_var(value_text: &str, properties: &CustomProperties) -> Option<String> {
    let trimmed = value_text.trim();
    let Some(args_text) = trimmed
        .strip_prefix("var(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return Some(trimmed.to_owned());
    };
    let (name_text, fallback) = match args_text.split_once(',') {
        Some((name_part, fallback_part)) => (name_part.trim(), Some(fallback_part.trim())),
        None => (args_text.trim(), None),
    };
    if is_custom_property_name(name_text)
        && let Some(value) = properties.get(name_text)
    {
        return Some(value.to_owned());
    }
    fallback.map(str::to_owned)
}
