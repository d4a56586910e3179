pub mod analysis;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod source;

pub use analysis::DrawHistoryAnalyzer;
pub use error::{AnalyzerError, FetchError};
pub use history::DrawHistory;
pub use models::DrawRecord;
