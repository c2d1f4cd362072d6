use crate::notice_generation::domain::{FilterRule, OverrideRule};

/// RuleProvider port for loading custom attribute rules
///
/// Rules are loaded once from configuration and are read-only during
/// processing. Filter rules can exclude a component from the report;
/// override rules can rewrite a component's license text.
pub trait RuleProvider {
    /// Returns the filter rules in configuration-declared order.
    fn filter_rules(&self) -> Vec<FilterRule>;

    /// Returns the override rules in configuration-declared order.
    fn override_rules(&self) -> Vec<OverrideRule>;
}
