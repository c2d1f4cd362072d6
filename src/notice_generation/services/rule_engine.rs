use crate::notice_generation::domain::{ComponentRecord, FilterRule, OverrideKind, OverrideRule};

/// RuleEngine - applies configured filter and override rules
///
/// Two independent passes over the full component list: all filter
/// rules first, then all override rules, each pass in
/// configuration-declared rule order. Filters only ever turn inclusion
/// off; a component excluded by one rule stays excluded.
pub struct RuleEngine {
    filter_rules: Vec<FilterRule>,
    override_rules: Vec<OverrideRule>,
}

impl RuleEngine {
    pub fn new(filter_rules: Vec<FilterRule>, override_rules: Vec<OverrideRule>) -> Self {
        Self {
            filter_rules,
            override_rules,
        }
    }

    /// Applies both passes, returning the warnings produced by
    /// unrecognized override kinds and empty license lists.
    pub fn apply(&self, components: &mut [ComponentRecord]) -> Vec<String> {
        let mut warnings = Vec::new();
        self.apply_filters(components);
        self.apply_overrides(components, &mut warnings);
        warnings
    }

    fn apply_filters(&self, components: &mut [ComponentRecord]) {
        for rule in &self.filter_rules {
            for component in components.iter_mut() {
                let Some(attribute) = component.attribute(rule.attribute()) else {
                    continue;
                };
                if attribute.value() == rule.value() {
                    component.exclude_from_report();
                }
            }
        }
    }

    fn apply_overrides(&self, components: &mut [ComponentRecord], warnings: &mut Vec<String>) {
        for rule in &self.override_rules {
            for component in components.iter_mut() {
                let Some(attribute) = component.attribute(rule.attribute()) else {
                    continue;
                };
                match rule.kind() {
                    OverrideKind::License => {
                        let new_text = attribute.value().to_string();
                        if component.override_first_license(&new_text).is_none() {
                            warnings.push(format!(
                                "override rule '{}' matched component {} which has no licenses; skipping",
                                rule.attribute(),
                                component.key()
                            ));
                        }
                    }
                    OverrideKind::Unrecognized(raw) => warnings.push(format!(
                        "unrecognized override type '{}' for rule '{}' on component {}; ignoring",
                        raw,
                        rule.attribute(),
                        component.key()
                    )),
                }
            }
        }
    }
}
