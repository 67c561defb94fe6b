//! Declarative attribute source for toggle configuration.
//!
//! The host parses its styling language into an [`AttributeSource`]; the
//! toggle only reads from it. [`AttributeSet`] is a map-backed source that
//! can also be loaded from YAML:
//!
//! ```
//! use switchyard_core::{AttrKey, AttributeSet, AttributeSource};
//!
//! let attrs = AttributeSet::from_yaml(
//!     "checked: true\nswitchBkgCheckedColor: \"#00ff00\"\n",
//! )
//! .unwrap();
//! assert_eq!(attrs.read_bool(AttrKey::Checked), Some(true));
//! assert!(attrs.read_color(AttrKey::BkgCheckedColor).is_some());
//! ```

use crate::color::Color;
use crate::resource::ResourceId;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The fixed set of attributes a toggle reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttrKey {
    /// Initial checked state
    Checked,
    /// Aspect-ratio lock
    ForceAspectRatio,
    /// Whether interaction is permitted
    Enabled,
    /// Track color when checked
    BkgCheckedColor,
    /// Track color when unchecked
    BkgNotCheckedColor,
    /// Handle color when checked
    ToggleCheckedColor,
    /// Handle color when unchecked
    ToggleNotCheckedColor,
    /// Handle icon when checked
    ToggleCheckedImage,
    /// Handle icon when unchecked
    ToggleNotCheckedImage,
}

impl AttrKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Checked,
        Self::ForceAspectRatio,
        Self::Enabled,
        Self::BkgCheckedColor,
        Self::BkgNotCheckedColor,
        Self::ToggleCheckedColor,
        Self::ToggleNotCheckedColor,
        Self::ToggleCheckedImage,
        Self::ToggleNotCheckedImage,
    ];

    /// Attribute name in declarative sources.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::ForceAspectRatio => "forceAspectRatio",
            Self::Enabled => "enabled",
            Self::BkgCheckedColor => "switchBkgCheckedColor",
            Self::BkgNotCheckedColor => "switchBkgNotCheckedColor",
            Self::ToggleCheckedColor => "switchToggleCheckedColor",
            Self::ToggleNotCheckedColor => "switchToggleNotCheckedColor",
            Self::ToggleCheckedImage => "switchToggleCheckedImage",
            Self::ToggleNotCheckedImage => "switchToggleNotCheckedImage",
        }
    }

    /// Look a key up by its attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only access to declarative attributes.
///
/// Every read returns `None` when the attribute is not set or has the wrong
/// type; the `*_or` helpers apply an explicit default.
pub trait AttributeSource {
    /// Read a boolean attribute.
    fn read_bool(&self, key: AttrKey) -> Option<bool>;

    /// Read a color attribute.
    fn read_color(&self, key: AttrKey) -> Option<Color>;

    /// Read a resource identifier attribute.
    fn read_resource(&self, key: AttrKey) -> Option<ResourceId>;

    /// Read a boolean attribute with a default.
    fn bool_or(&self, key: AttrKey, default: bool) -> bool {
        self.read_bool(key).unwrap_or(default)
    }

    /// Read a color attribute with a default.
    fn color_or(&self, key: AttrKey, default: Color) -> Color {
        self.read_color(key).unwrap_or(default)
    }

    /// Read a resource identifier attribute with a default.
    fn resource_or(&self, key: AttrKey, default: ResourceId) -> ResourceId {
        self.read_resource(key).unwrap_or(default)
    }
}

/// A typed attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue {
    /// Boolean value
    Bool(bool),
    /// Color value
    Color(Color),
    /// Resource identifier
    Resource(ResourceId),
}

/// Error raised when a declarative document cannot be read at all.
///
/// Individual bad values never produce an error: they are dropped with a
/// warning so the attribute behaves as unset.
#[derive(Debug, Error)]
pub enum AttributeError {
    /// The document is not valid YAML for an attribute map.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Map-backed attribute source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    values: HashMap<AttrKey, AttrValue>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean attribute.
    #[must_use]
    pub fn with_bool(mut self, key: AttrKey, value: bool) -> Self {
        self.values.insert(key, AttrValue::Bool(value));
        self
    }

    /// Set a color attribute.
    #[must_use]
    pub fn with_color(mut self, key: AttrKey, value: Color) -> Self {
        self.values.insert(key, AttrValue::Color(value));
        self
    }

    /// Set a resource attribute.
    #[must_use]
    pub fn with_resource(mut self, key: AttrKey, value: ResourceId) -> Self {
        self.values.insert(key, AttrValue::Resource(value));
        self
    }

    /// Raw value of an attribute.
    #[must_use]
    pub fn get(&self, key: AttrKey) -> Option<AttrValue> {
        self.values.get(&key).copied()
    }

    /// Number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse an attribute map from YAML.
    ///
    /// Colors are hex strings, images are integer resource identifiers.
    /// Unknown keys are ignored; malformed colors are dropped with a warning.
    pub fn from_yaml(yaml: &str) -> Result<Self, AttributeError> {
        let raw: RawAttributes = serde_yaml_ng::from_str(yaml)?;
        Ok(raw.into_set())
    }
}

impl AttributeSource for AttributeSet {
    fn read_bool(&self, key: AttrKey) -> Option<bool> {
        match self.get(key)? {
            AttrValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    fn read_color(&self, key: AttrKey) -> Option<Color> {
        match self.get(key)? {
            AttrValue::Color(v) => Some(v),
            _ => None,
        }
    }

    fn read_resource(&self, key: AttrKey) -> Option<ResourceId> {
        match self.get(key)? {
            AttrValue::Resource(v) => Some(v),
            _ => None,
        }
    }
}

/// Document shape for YAML attribute maps.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawAttributes {
    checked: Option<bool>,
    force_aspect_ratio: Option<bool>,
    enabled: Option<bool>,
    switch_bkg_checked_color: Option<String>,
    switch_bkg_not_checked_color: Option<String>,
    switch_toggle_checked_color: Option<String>,
    switch_toggle_not_checked_color: Option<String>,
    switch_toggle_checked_image: Option<u32>,
    switch_toggle_not_checked_image: Option<u32>,
}

impl RawAttributes {
    fn into_set(self) -> AttributeSet {
        let mut set = AttributeSet::new();
        let bools = [
            (AttrKey::Checked, self.checked),
            (AttrKey::ForceAspectRatio, self.force_aspect_ratio),
            (AttrKey::Enabled, self.enabled),
        ];
        for (key, value) in bools {
            if let Some(v) = value {
                set = set.with_bool(key, v);
            }
        }

        let colors = [
            (AttrKey::BkgCheckedColor, self.switch_bkg_checked_color),
            (AttrKey::BkgNotCheckedColor, self.switch_bkg_not_checked_color),
            (AttrKey::ToggleCheckedColor, self.switch_toggle_checked_color),
            (AttrKey::ToggleNotCheckedColor, self.switch_toggle_not_checked_color),
        ];
        for (key, value) in colors {
            let Some(text) = value else { continue };
            match Color::from_hex(&text) {
                Ok(color) => set = set.with_color(key, color),
                Err(err) => {
                    tracing::warn!(attribute = %key, value = %text, error = %err, "ignoring malformed color");
                }
            }
        }

        let images = [
            (AttrKey::ToggleCheckedImage, self.switch_toggle_checked_image),
            (AttrKey::ToggleNotCheckedImage, self.switch_toggle_not_checked_image),
        ];
        for (key, value) in images {
            if let Some(raw) = value {
                set = set.with_resource(key, ResourceId::new(raw));
            }
        }
        set
    }
}
