/// Notice generation - domain layer
///
/// Pure business logic for notice report assembly: the component,
/// license, attribute and rule records, and the services that resolve
/// attributes, collect them onto components and apply the configured
/// rules.
pub mod domain;
pub mod services;
