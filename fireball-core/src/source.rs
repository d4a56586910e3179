use crate::error::FetchError;
use crate::history::DrawHistory;
use crate::models::DrawRecord;

/// Somewhere the latest draw can be read from. Implementations return a
/// validated record or a typed failure, never a partial one.
pub trait DrawSource {
    fn name(&self) -> &str;

    fn fetch_latest(&self) -> Result<DrawRecord, FetchError>;
}

/// Fetches from `source` and appends on success. On failure the history
/// is left as it was and the error is handed back for reporting.
pub fn fetch_into(source: &dyn DrawSource, history: &mut DrawHistory) -> Result<DrawRecord, FetchError> {
    match source.fetch_latest() {
        Ok(draw) => {
            log::info!("{}: fetched {} on '{}'", source.name(), draw, draw.date());
            history.append(draw.clone());
            Ok(draw)
        }
        Err(e) => {
            log::warn!("{}: fetch failed: {}", source.name(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Option<DrawRecord>);

    impl DrawSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch_latest(&self) -> Result<DrawRecord, FetchError> {
            self.0
                .clone()
                .ok_or_else(|| FetchError::SectionNotFound("Pick 3 Evening".to_string()))
        }
    }

    #[test]
    fn test_fetch_into_appends() {
        let draw = DrawRecord::new("Friday, June 7, 2024", "503", "8").unwrap();
        let source = FixedSource(Some(draw.clone()));
        let mut history = DrawHistory::new();

        let fetched = fetch_into(&source, &mut history).unwrap();
        assert_eq!(fetched, draw);
        assert_eq!(history.records(), &[draw]);
    }

    #[test]
    fn test_fetch_failure_leaves_history() {
        let source = FixedSource(None);
        let mut history = DrawHistory::new();
        history.append(DrawRecord::new("", "111", "1").unwrap());

        let err = fetch_into(&source, &mut history).unwrap_err();
        assert!(matches!(err, FetchError::SectionNotFound(_)));
        assert_eq!(history.len(), 1);
    }
}
