use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// A recorded Pick-3 draw. Fields are kept as text so leading zeros survive
/// (`"028"` is not `"28"`). Only constructible through [`DrawRecord::new`],
/// which rejects anything that is not 3 main digits plus 1 fireball digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDraw")]
pub struct DrawRecord {
    date: String,
    main: String,
    fireball: String,
}

#[derive(Deserialize)]
struct RawDraw {
    #[serde(default)]
    date: String,
    main: String,
    fireball: String,
}

impl TryFrom<RawDraw> for DrawRecord {
    type Error = AnalyzerError;

    fn try_from(raw: RawDraw) -> Result<Self, Self::Error> {
        DrawRecord::new(raw.date, &raw.main, &raw.fireball)
    }
}

impl DrawRecord {
    pub fn new(date: impl Into<String>, main: &str, fireball: &str) -> Result<Self, AnalyzerError> {
        let main = main.trim();
        let fireball = fireball.trim();
        validate_draw(main, fireball)?;

        let date: String = date.into();
        Ok(Self {
            date: date.trim().to_string(),
            main: main.to_string(),
            fireball: fireball.to_string(),
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn fireball(&self) -> &str {
        &self.fireball
    }

    pub fn main_digits(&self) -> [u8; 3] {
        let b = self.main.as_bytes();
        [b[0] - b'0', b[1] - b'0', b[2] - b'0']
    }

    pub fn fireball_digit(&self) -> u8 {
        self.fireball.as_bytes()[0] - b'0'
    }
}

impl fmt::Display for DrawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (FB: {})", self.main, self.fireball)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Main,
    Fireball,
}

impl Pool {
    /// Digits drawn per record for this pool.
    pub fn pick_count(&self) -> usize {
        match self {
            Pool::Main => 3,
            Pool::Fireball => 1,
        }
    }

    pub fn digits_from(self, record: &DrawRecord) -> impl Iterator<Item = u8> + '_ {
        let text = match self {
            Pool::Main => record.main(),
            Pool::Fireball => record.fireball(),
        };
        text.bytes().map(|b| b - b'0')
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Main => write!(f, "main digit"),
            Pool::Fireball => write!(f, "fireball"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitTag {
    Hot,
    Cold,
    Normal,
}

impl fmt::Display for DigitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitTag::Hot => write!(f, "HOT"),
            DigitTag::Cold => write!(f, "COLD"),
            DigitTag::Normal => write!(f, "-"),
        }
    }
}

/// Most and least frequent digits of one frequency table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotCold {
    pub hot: Vec<u8>,
    pub cold: Vec<u8>,
}

impl HotCold {
    /// A digit present in both sets (small tables) reads as hot.
    pub fn tag(&self, digit: u8) -> DigitTag {
        if self.hot.contains(&digit) {
            DigitTag::Hot
        } else if self.cold.contains(&digit) {
            DigitTag::Cold
        } else {
            DigitTag::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub main: String,
    pub fireball: String,
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (FB: {})", self.main, self.fireball)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSet {
    pub hot: Vec<Combination>,
    pub cold: Vec<Combination>,
}

pub fn validate_draw(main: &str, fireball: &str) -> Result<(), AnalyzerError> {
    if main.len() != 3 {
        return Err(AnalyzerError::invalid("main", main, "expected exactly 3 digits"));
    }
    if !main.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalyzerError::invalid("main", main, "only digits 0-9 are allowed"));
    }
    if fireball.len() != 1 || !fireball.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalyzerError::invalid("fireball", fireball, "expected a single digit 0-9"));
    }
    Ok(())
}
