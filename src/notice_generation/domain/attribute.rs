use crate::ports::outbound::AttributeMeta;
use serde::Serialize;

/// AttributeRecord value object - a resolved custom attribute on a component
///
/// Combines the resolved definition metadata (name, description) with
/// the first value entered on the component or its request. Immutable
/// once constructed; never constructed with an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRecord {
    id: String,
    name: String,
    description: String,
    value: String,
}

impl AttributeRecord {
    pub fn from_meta(meta: &AttributeMeta, value: String) -> Self {
        Self {
            id: meta.id.clone(),
            name: meta.question.clone(),
            description: meta.description.clone(),
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
