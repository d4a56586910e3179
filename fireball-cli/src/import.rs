use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use fireball_core::history::DrawHistory;
use fireball_core::models::DrawRecord;

const HEADER: [&str; 3] = ["date", "main", "fireball"];

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub errors: u32,
}

/// Appends every valid row of a `date,main,fireball` CSV to `history`.
/// Fields are read as text so `028` stays `028`. Invalid rows are logged
/// and counted, not fatal.
pub fn import_reader<R: Read>(history: &mut DrawHistory, input: R) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("Cannot read CSV header")?.clone();
    for required in ["main", "fireball"] {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
            bail!("CSV header must contain 'date', 'main' and 'fireball' columns (found: {:?})", headers);
        }
    }
    reader.set_headers(headers.iter().map(|h| h.to_ascii_lowercase()).collect());

    let mut result = ImportResult {
        total_records: 0,
        inserted: 0,
        errors: 0,
    };

    for record_result in reader.deserialize::<DrawRecord>() {
        result.total_records += 1;
        match record_result {
            Ok(draw) => {
                history.append(draw);
                result.inserted += 1;
            }
            Err(e) => {
                log::warn!("skipping CSV row {}: {}", result.total_records, e);
                result.errors += 1;
            }
        }
    }

    log::info!(
        "imported {} of {} rows ({} rejected)",
        result.inserted,
        result.total_records,
        result.errors
    );
    Ok(result)
}

pub fn import_csv(history: &mut DrawHistory, path: &Path) -> Result<ImportResult> {
    let file = std::fs::File::open(path).with_context(|| format!("Cannot open {:?}", path))?;
    import_reader(history, file).with_context(|| format!("Cannot import {:?}", path))
}

pub fn export_writer<W: Write>(history: &DrawHistory, output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(HEADER)?;
    for draw in history {
        writer.write_record([draw.date(), draw.main(), draw.fireball()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_csv(history: &DrawHistory, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path).with_context(|| format!("Cannot create {:?}", path))?;
    export_writer(history, file).with_context(|| format!("Cannot write {:?}", path))?;
    log::info!("exported {} draws to {:?}", history.len(), path);
    Ok(history.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_keeps_leading_zeros() {
        let data = "date,main,fireball\n2024-05-01,028,0\n2024-05-02,700,9\n";
        let mut history = DrawHistory::new();
        let result = import_reader(&mut history, data.as_bytes()).unwrap();

        assert_eq!(result.total_records, 2);
        assert_eq!(result.inserted, 2);
        assert_eq!(result.errors, 0);
        assert_eq!(history.records()[0].main(), "028");
        assert_eq!(history.records()[0].fireball(), "0");
        assert_eq!(history.records()[1].date(), "2024-05-02");
    }

    #[test]
    fn test_import_skips_invalid_rows() {
        let data = "date,main,fireball\n2024-05-01,28,1\n2024-05-02,123,x\n2024-05-03,456,7\n";
        let mut history = DrawHistory::new();
        let result = import_reader(&mut history, data.as_bytes()).unwrap();

        assert_eq!(result.total_records, 3);
        assert_eq!(result.inserted, 1);
        assert_eq!(result.errors, 2);
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].main(), "456");
    }

    #[test]
    fn test_import_column_order_and_extra_columns() {
        let data = "Fireball,Main,Date,Notes\n4,015,2024-01-01,evening\n";
        let mut history = DrawHistory::new();
        import_reader(&mut history, data.as_bytes()).unwrap();

        let draw = &history.records()[0];
        assert_eq!(draw.main(), "015");
        assert_eq!(draw.fireball(), "4");
        assert_eq!(draw.date(), "2024-01-01");
    }

    #[test]
    fn test_import_requires_header() {
        let data = "2024-05-01,028,0\n";
        let mut history = DrawHistory::new();
        assert!(import_reader(&mut history, data.as_bytes()).is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn test_import_appends_to_existing() {
        let mut history = DrawHistory::new();
        history.append(DrawRecord::new("2024-04-30", "999", "9").unwrap());
        import_reader(&mut history, "date,main,fireball\n2024-05-01,001,1\n".as_bytes()).unwrap();

        let mains: Vec<&str> = history.iter().map(|d| d.main()).collect();
        assert_eq!(mains, vec!["999", "001"]);
    }

    #[test]
    fn test_export_then_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut history = DrawHistory::new();
        history.append(DrawRecord::new("2024-05-01", "028", "0").unwrap());
        history.append(DrawRecord::new("Friday, May 3, 2024", "600", "5").unwrap());
        assert_eq!(export_csv(&history, &path).unwrap(), 2);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("date,main,fireball\n"));
        assert!(text.contains("2024-05-01,028,0"));

        let mut restored = DrawHistory::new();
        import_csv(&mut restored, &path).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn test_export_empty_history_writes_header() {
        let mut buf = Vec::new();
        export_writer(&DrawHistory::new(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "date,main,fireball\n");
    }

    #[test]
    fn test_import_missing_file() {
        let mut history = DrawHistory::new();
        assert!(import_csv(&mut history, Path::new("/nonexistent/draws.csv")).is_err());
    }
}
