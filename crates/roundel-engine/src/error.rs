use thiserror::Error;

/// Rejected shape configuration.
///
/// Setters that return this error leave the previous value in place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f32 },
}
