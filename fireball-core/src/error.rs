use crate::models::Pool;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzerError {
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{0} pool is empty")]
    EmptyPool(Pool),
}

impl AnalyzerError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        AnalyzerError::InvalidInput {
            field,
            value: value.into(),
            reason,
        }
    }
}

/// Failure of a latest-draw source. Never fatal for the session.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {detail}")]
    Http { url: String, detail: String },

    #[error("section '{0}' not found on results page")]
    SectionNotFound(String),

    #[error("malformed results page: {0}")]
    Malformed(String),

    #[error(transparent)]
    InvalidDraw(#[from] AnalyzerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalyzerError::invalid("main", "27", "expected exactly 3 digits");
        assert_eq!(err.to_string(), "invalid main '27': expected exactly 3 digits");
        assert_eq!(
            AnalyzerError::EmptyPool(Pool::Fireball).to_string(),
            "fireball pool is empty"
        );
    }

    #[test]
    fn test_fetch_error_wraps_invalid_draw() {
        let err: FetchError = AnalyzerError::invalid("fireball", "x", "expected a single digit").into();
        assert!(matches!(err, FetchError::InvalidDraw(_)));
        assert_eq!(err.to_string(), "invalid fireball 'x': expected a single digit");
    }
}
