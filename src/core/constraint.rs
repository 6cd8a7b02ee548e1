//! Validation constraints for block props
//!
//! Constraints are advisory: the editor uses them to flag bad configuration,
//! but nothing in the system refuses to save an invalid instance. Validation
//! is pure and accumulates every failing check instead of short-circuiting,
//! so the editor can show the whole problem list at once.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::props::{PropMap, PropValue};

/// Custom validator hook: returns `Ok(())` or a human-readable error.
pub type CustomValidator = Arc<dyn Fn(&PropMap) -> Result<(), String> + Send + Sync>;

/// Declarative validation rules for one block type's props.
///
/// Checks run in a fixed order: required, min, max, pattern, custom.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct PropConstraints {
    /// Props that must be present and non-empty
    #[serde(default)]
    pub required: Vec<String>,
    /// Numeric lower bounds per prop
    #[serde(default)]
    pub min: HashMap<String, f64>,
    /// Numeric upper bounds per prop
    #[serde(default)]
    pub max: HashMap<String, f64>,
    /// Regex patterns per string prop (compiled at check time)
    #[serde(default)]
    pub patterns: HashMap<String, String>,
    /// Custom validator, not serialized
    #[serde(skip)]
    pub custom: Option<CustomValidator>,
}

impl PropConstraints {
    /// Create an empty constraints object
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark props as required (present and non-empty)
    pub fn require<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set a numeric lower bound for a prop
    pub fn with_min(mut self, prop: impl Into<String>, min: f64) -> Self {
        self.min.insert(prop.into(), min);
        self
    }

    /// Set a numeric upper bound for a prop
    pub fn with_max(mut self, prop: impl Into<String>, max: f64) -> Self {
        self.max.insert(prop.into(), max);
        self
    }

    /// Set a regex pattern for a string prop
    pub fn with_pattern(mut self, prop: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(prop.into(), pattern.into());
        self
    }

    /// Set a custom validator run after the declarative checks
    pub fn with_custom<F>(mut self, validator: F) -> Self
    where
        F: Fn(&PropMap) -> Result<(), String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(validator));
        self
    }

    /// Run every check against the given props, accumulating all failures.
    pub fn check(&self, props: &PropMap) -> ValidationResult {
        let mut result = ValidationResult::ok();

        // 1. Required props must be present and non-empty.
        for prop in &self.required {
            match props.get(prop) {
                None => result.push_error(format!("required prop '{}' is missing", prop)),
                Some(value) if value.is_empty() => {
                    result.push_error(format!("required prop '{}' is empty", prop))
                }
                Some(_) => {}
            }
        }

        // 2. Numeric lower bounds.
        for (prop, min) in sorted(&self.min) {
            if let Some(value) = props.get(prop) {
                match value.as_number() {
                    Some(n) if n < *min => result.push_error(format!(
                        "prop '{}' is {} but must be at least {}",
                        prop, n, min
                    )),
                    Some(_) => {}
                    None => result.push_error(format!(
                        "prop '{}' has a min constraint but is not a number",
                        prop
                    )),
                }
            }
        }

        // 3. Numeric upper bounds.
        for (prop, max) in sorted(&self.max) {
            if let Some(value) = props.get(prop) {
                match value.as_number() {
                    Some(n) if n > *max => result.push_error(format!(
                        "prop '{}' is {} but must be at most {}",
                        prop, n, max
                    )),
                    Some(_) => {}
                    None => result.push_error(format!(
                        "prop '{}' has a max constraint but is not a number",
                        prop
                    )),
                }
            }
        }

        // 4. Regex patterns on string props.
        for (prop, pattern) in sorted(&self.patterns) {
            if let Some(PropValue::String(text)) = props.get(prop) {
                match regex::Regex::new(pattern) {
                    Ok(re) => {
                        if !re.is_match(text) {
                            result.push_error(format!(
                                "prop '{}' does not match pattern '{}'",
                                prop, pattern
                            ));
                        }
                    }
                    // A bad pattern in a definition must not take the editor
                    // down during advisory validation.
                    Err(_) => result.push_error(format!(
                        "prop '{}' has an invalid pattern '{}'",
                        prop, pattern
                    )),
                }
            }
        }

        // 5. Custom validator.
        if let Some(custom) = &self.custom {
            if let Err(msg) = custom(props) {
                result.push_error(msg);
            }
        }

        result
    }
}

impl fmt::Debug for PropConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropConstraints")
            .field("required", &self.required)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("patterns", &self.patterns)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Iterate a constraint map in deterministic key order, so repeated
/// validation of the same instance reports errors in the same order.
fn sorted<V>(map: &HashMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Result of validating a block instance against its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every check passed
    pub valid: bool,
    /// Human-readable error messages, one per failing check
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Create a failing result with a single error
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![msg.into()],
        }
    }

    /// Add an error, marking the result invalid
    pub fn push_error(&mut self, msg: impl Into<String>) {
        self.valid = false;
        self.errors.push(msg.into());
    }

    /// Check if the result has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
    }
}
