pub mod attribute_collector;
pub mod attribute_resolver;
pub mod rule_engine;

pub use attribute_collector::AttributeCollector;
pub use attribute_resolver::CachingAttributeResolver;
pub use rule_engine::RuleEngine;
