/// Issue report domain - payload model and the rules that turn raw
/// SonarQube search results into display values
pub mod domain;
pub mod services;
