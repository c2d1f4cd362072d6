/// Kind of action an override rule performs, decided once at rule-load
/// time rather than re-parsed per component.
///
/// Only the `LICENSE` kind is recognized today; any other configured
/// value is carried as `Unrecognized` so the rule engine can report it
/// and treat its application as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideKind {
    License,
    Unrecognized(String),
}

impl OverrideKind {
    /// Parses the configured override value, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("license") {
            OverrideKind::License
        } else {
            OverrideKind::Unrecognized(raw.to_string())
        }
    }
}

/// A configured filter rule: excludes a component from the report when
/// the named attribute carries the given value.
///
/// The comparison value is trimmed at load time; matching is exact,
/// case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    attribute: String,
    value: String,
}

impl FilterRule {
    pub fn new(attribute: String, value: &str) -> Self {
        Self {
            attribute,
            value: value.trim().to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A configured override rule: rewrites a component's license text from
/// the named attribute's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRule {
    attribute: String,
    kind: OverrideKind,
}

impl OverrideRule {
    pub fn new(attribute: String, configured_value: &str) -> Self {
        Self {
            attribute,
            kind: OverrideKind::parse(configured_value),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn kind(&self) -> &OverrideKind {
        &self.kind
    }
}
