//! Band lookup errors.

use thiserror::Error;

/// A band identifier that is not present in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown band identifier: {0:?}")]
pub struct UnknownBandError(pub String);

impl UnknownBandError {
    /// The identifier that failed to resolve.
    pub fn identifier(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_identifier() {
        let err = UnknownBandError("EU_999".to_string());
        assert_eq!(err.to_string(), "unknown band identifier: \"EU_999\"");
        assert_eq!(err.identifier(), "EU_999");
    }
}
