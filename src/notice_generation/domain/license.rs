use serde::Serialize;

/// Suffix appended to a license name when an override rule rewrites it.
pub const OVERRIDE_NAME_SUFFIX: &str = "(OVERRIDE)";

/// Suffix appended to a license identifier when an override rule rewrites it.
pub const OVERRIDE_ID_SUFFIX: &str = "_OVERRIDE";

/// LicenseRecord - one license attached to a component
///
/// `name` is absent for licenses that came from scanned files rather
/// than the server's knowledge base. Mutated in place only by override
/// rule application.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct LicenseRecord {
    id: String,
    name: Option<String>,
    text: String,
}

impl LicenseRecord {
    pub fn new(id: String, name: Option<String>, text: String) -> Self {
        Self { id, name, text }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rewrites this license with override text.
    ///
    /// The name gains the `(OVERRIDE)` suffix and the identifier the
    /// `_OVERRIDE` suffix so overridden entries remain recognizable in
    /// the rendered report.
    pub fn apply_override(&mut self, new_text: &str) {
        self.text = new_text.to_string();
        self.name = Some(match self.name.take() {
            Some(name) => format!("{}{}", name, OVERRIDE_NAME_SUFFIX),
            None => OVERRIDE_NAME_SUFFIX.to_string(),
        });
        self.id = format!("{}{}", self.id, OVERRIDE_ID_SUFFIX);
    }
}

/// Equality is by identifier when both sides carry one, otherwise by
/// license text.
impl PartialEq for LicenseRecord {
    fn eq(&self, other: &Self) -> bool {
        if !self.id.is_empty() && !other.id.is_empty() {
            self.id == other.id
        } else {
            self.text == other.text
        }
    }
}
