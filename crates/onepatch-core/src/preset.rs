//! The canonical in-memory preset.

use serde::Serialize;

use crate::error::DecodeError;
use crate::param::Parameter;
use crate::schema::{self, PARAMETERS};

/// Oldest plugin version whose chunks this crate can read (kHs ONE 1.014).
pub const MIN_SUPPORTED_VERSION: u32 = 1014;

/// A kHs ONE preset: a name, a plugin version and one value per schema entry.
///
/// Every codec decodes into this type and encodes from it. Parameters are
/// kept in schema order, which is also the binary chunk order.
///
/// # Example
///
/// ```rust
/// use onepatch_core::Preset;
///
/// let mut preset = Preset::new("Wobble Bass");
/// preset.set_value("FILTER_1_CUTOFF", 0.42).unwrap();
///
/// assert_eq!(preset.value("FILTER_1_CUTOFF"), Some(0.42));
/// assert_eq!(preset.len(), 108);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    /// Display name. Binary formats keep at most 24 bytes of it.
    pub name: String,

    /// Plugin version that saved the preset.
    pub version: u32,

    parameters: Vec<Parameter>,
}

impl Preset {
    /// Create a preset with every parameter at normalized `0.0`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: MIN_SUPPORTED_VERSION,
            parameters: PARAMETERS
                .iter()
                .map(|spec| Parameter::new(spec.name, spec.kind, spec.steps))
                .collect(),
        }
    }

    /// Set the plugin version.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Number of stored parameters (always the schema length).
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Always `false`; a preset carries the full schema.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// All parameters in chunk order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Iterate over parameters in chunk order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Iterate mutably over parameters in chunk order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Parameter> {
        self.parameters.iter_mut()
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        schema::index_of(name).map(|i| &self.parameters[i])
    }

    /// Get a mutable parameter by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        schema::index_of(name).map(move |i| &mut self.parameters[i])
    }

    /// Normalized value of a parameter.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(Parameter::normalized_value)
    }

    /// Set a parameter's normalized value by name.
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<(), DecodeError> {
        self.get_mut(name)
            .ok_or_else(|| DecodeError::UnexpectedParameter(name.to_string()))?
            .set_normalized_value(value)
    }

    /// Whether a switch parameter is engaged. Unknown names read as off.
    pub fn is_on(&self, name: &str) -> bool {
        self.get(name).is_some_and(Parameter::is_on)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
