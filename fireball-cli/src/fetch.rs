use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;

use fireball_core::config::SourceConfig;
use fireball_core::error::FetchError;
use fireball_core::models::DrawRecord;
use fireball_core::source::DrawSource;

static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").expect("valid h2 regex"));
static UL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<ul[^>]*>(.*?)</ul>").expect("valid ul regex"));
static LI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("valid li regex"));
static SECTION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h2|>\s*Pick\s+\d[^<]*<").expect("valid section end regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Extracts one game's latest result from a results page laid out as:
/// a dated `<h2>`, then an element whose whole text is the game label,
/// then a `<ul>` whose items 1..4 are the main digits and item 4 the Fireball.
/// The list must sit before the next game label or `<h2>`.
#[derive(Debug, Clone)]
pub struct ResultsPageParser {
    section: String,
    section_re: Regex,
}

impl ResultsPageParser {
    pub fn new(section: &str) -> Result<Self> {
        let section_re = Regex::new(&format!(r">\s*{}\s*<", regex::escape(section)))
            .with_context(|| format!("Invalid section label '{}'", section))?;
        Ok(Self {
            section: section.to_string(),
            section_re,
        })
    }

    pub fn parse(&self, html: &str) -> Result<DrawRecord, FetchError> {
        let label = self
            .section_re
            .find(html)
            .ok_or_else(|| FetchError::SectionNotFound(self.section.clone()))?;

        let date = H2_RE
            .captures_iter(&html[..label.start()])
            .last()
            .map(|c| text_of(&c[1]))
            .unwrap_or_default();

        let rest = &html[label.end()..];
        let section_end = SECTION_END_RE.find(rest).map_or(rest.len(), |m| m.start());
        let list = UL_RE
            .captures(&rest[..section_end])
            .ok_or_else(|| FetchError::Malformed(format!("no result list in '{}'", self.section)))?;

        let items: Vec<String> = LI_RE.captures_iter(&list[1]).map(|c| text_of(&c[1])).collect();
        if items.len() < 5 {
            return Err(FetchError::Malformed(format!(
                "expected at least 5 list items, found {}",
                items.len()
            )));
        }

        let main = items[1..4].concat();
        DrawRecord::new(date, &main, &items[4]).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

fn text_of(fragment: &str) -> String {
    TAG_RE
        .replace_all(fragment, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct HttpDrawSource {
    http: reqwest::blocking::Client,
    url: String,
    parser: ResultsPageParser,
}

impl HttpDrawSource {
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("fireball/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: config.url.clone(),
            parser: ResultsPageParser::new(&config.section)?,
        })
    }

    fn http_error(&self, detail: impl ToString) -> FetchError {
        FetchError::Http {
            url: self.url.clone(),
            detail: detail.to_string(),
        }
    }
}

impl DrawSource for HttpDrawSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch_latest(&self) -> Result<DrawRecord, FetchError> {
        log::debug!("GET {}", self.url);
        let res = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| self.http_error(e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(self.http_error(format!("HTTP {status}")));
        }

        let html = res.text().map_err(|e| self.http_error(e))?;
        self.parser.parse(&html)
    }
}
