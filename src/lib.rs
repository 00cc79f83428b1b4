//! Psyche: five-dimension personality questionnaire
//!
//! This library holds the fixed question table, the scorer that turns
//! Likert ratings into per-dimension scores and a personality type, and the
//! reporters that render an [`Assessment`].

pub mod config;
pub mod descriptions;
pub mod error;
pub mod interrupt;
pub mod questionnaire;
pub mod reporter;
pub mod scoring;
pub mod session;

pub use error::{ResponseParseError, ScoreError, TypeCodeError};

use serde::Serialize;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// One of the five bipolar personality axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    /// Extraversion (E) vs Introversion (I)
    EI,
    /// Sensing (S) vs Intuition (N)
    SN,
    /// Thinking (T) vs Feeling (F)
    TF,
    /// Judging (J) vs Perceiving (P)
    JP,
    /// Assertive (A) vs Turbulent (T)
    AT,
}

impl Dimension {
    /// All dimensions in report order
    pub const ALL: [Dimension; 5] = [
        Dimension::EI,
        Dimension::SN,
        Dimension::TF,
        Dimension::JP,
        Dimension::AT,
    ];

    /// Letter for the first (positive) and second (negative) pole
    pub fn letters(self) -> (char, char) {
        match self {
            Dimension::EI => ('E', 'I'),
            Dimension::SN => ('S', 'N'),
            Dimension::TF => ('T', 'F'),
            Dimension::JP => ('J', 'P'),
            Dimension::AT => ('A', 'T'),
        }
    }

    /// Letter a score leans toward; zero counts as the first pole
    pub fn letter_for(self, score: i32) -> char {
        let (first, second) = self.letters();
        if score >= 0 {
            first
        } else {
            second
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.letters();
        write!(f, "{}{}", first, second)
    }
}

/// Whether agreeing with a statement pushes toward the first or second letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

impl Serialize for Polarity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.sign())
    }
}

/// A fixed questionnaire statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub dimension: Dimension,
    pub polarity: Polarity,
}

impl Question {
    pub const fn new(text: &'static str, dimension: Dimension, polarity: Polarity) -> Self {
        Self {
            text,
            dimension,
            polarity,
        }
    }
}

/// A five-point agreement rating, always in 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const NEUTRAL: Likert = Likert(3);

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Likert {
    type Error = ResponseParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Likert::new)
            .ok_or(ResponseParseError::OutOfRange(value))
    }
}

impl FromStr for Likert {
    type Err = ResponseParseError;

    /// Parse one line of user input ("4", " 2 ", "+5")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => ResponseParseError::OutOfRange(i64::MAX),
            IntErrorKind::NegOverflow => ResponseParseError::OutOfRange(i64::MIN),
            _ => ResponseParseError::NotANumber(trimmed.to_string()),
        })?;
        Likert::try_from(value)
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed accumulator per dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DimensionScores {
    #[serde(rename = "EI")]
    pub ei: i32,
    #[serde(rename = "SN")]
    pub sn: i32,
    #[serde(rename = "TF")]
    pub tf: i32,
    #[serde(rename = "JP")]
    pub jp: i32,
    #[serde(rename = "AT")]
    pub at: i32,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::EI => self.ei,
            Dimension::SN => self.sn,
            Dimension::TF => self.tf,
            Dimension::JP => self.jp,
            Dimension::AT => self.at,
        }
    }

    pub fn add(&mut self, dimension: Dimension, delta: i32) {
        let slot = match dimension {
            Dimension::EI => &mut self.ei,
            Dimension::SN => &mut self.sn,
            Dimension::TF => &mut self.tf,
            Dimension::JP => &mut self.jp,
            Dimension::AT => &mut self.at,
        };
        *slot += delta;
    }
}

/// The sixteen four-letter types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl BaseType {
    pub const ALL: [BaseType; 16] = [
        BaseType::INTJ,
        BaseType::INTP,
        BaseType::ENTJ,
        BaseType::ENTP,
        BaseType::INFJ,
        BaseType::INFP,
        BaseType::ENFJ,
        BaseType::ENFP,
        BaseType::ISTJ,
        BaseType::ISFJ,
        BaseType::ESTJ,
        BaseType::ESFJ,
        BaseType::ISTP,
        BaseType::ISFP,
        BaseType::ESTP,
        BaseType::ESFP,
    ];

    /// Build a type from the four pole choices (true = first letter)
    pub fn from_poles(extravert: bool, sensing: bool, thinking: bool, judging: bool) -> Self {
        use BaseType::*;
        match (extravert, sensing, thinking, judging) {
            (false, false, true, true) => INTJ,
            (false, false, true, false) => INTP,
            (true, false, true, true) => ENTJ,
            (true, false, true, false) => ENTP,
            (false, false, false, true) => INFJ,
            (false, false, false, false) => INFP,
            (true, false, false, true) => ENFJ,
            (true, false, false, false) => ENFP,
            (false, true, true, true) => ISTJ,
            (false, true, false, true) => ISFJ,
            (true, true, true, true) => ESTJ,
            (true, true, false, true) => ESFJ,
            (false, true, true, false) => ISTP,
            (false, true, false, false) => ISFP,
            (true, true, true, false) => ESTP,
            (true, true, false, false) => ESFP,
        }
    }

    pub fn code(self) -> &'static str {
        use BaseType::*;
        match self {
            INTJ => "INTJ",
            INTP => "INTP",
            ENTJ => "ENTJ",
            ENTP => "ENTP",
            INFJ => "INFJ",
            INFP => "INFP",
            ENFJ => "ENFJ",
            ENFP => "ENFP",
            ISTJ => "ISTJ",
            ISFJ => "ISFJ",
            ESTJ => "ESTJ",
            ESFJ => "ESFJ",
            ISTP => "ISTP",
            ISFP => "ISFP",
            ESTP => "ESTP",
            ESFP => "ESFP",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BaseType {
    type Err = TypeCodeError;

    /// Accepts "intj", "INTJ" and full codes such as "INTJ-T"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let base = match upper.split_once('-') {
            None => upper.as_str(),
            Some((base, "A" | "T")) => base,
            Some(_) => return Err(TypeCodeError(s.to_string())),
        };
        BaseType::ALL
            .into_iter()
            .find(|t| t.code() == base)
            .ok_or_else(|| TypeCodeError(s.to_string()))
    }
}

/// Assertive/Turbulent modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Identity {
    #[serde(rename = "A")]
    Assertive,
    #[serde(rename = "T")]
    Turbulent,
}

impl Identity {
    pub fn from_score(score: i32) -> Self {
        if score >= 0 {
            Identity::Assertive
        } else {
            Identity::Turbulent
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Identity::Assertive => "-A",
            Identity::Turbulent => "-T",
        }
    }
}

/// Four-letter type plus identity suffix, e.g. INTJ-T
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityType {
    pub base: BaseType,
    pub identity: Identity,
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.identity.suffix())
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strength of one dimension's preference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionResult {
    pub dimension: Dimension,
    /// Pole the score leans toward, e.g. "Introversion (I)"
    pub tendency: &'static str,
    pub score: i32,
    pub max_score: i32,
    /// Strength of preference (0-100)
    pub percentage: u8,
}

/// Everything derived from one complete response vector
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub personality_type: PersonalityType,
    pub scores: DimensionScores,
    pub dimensions: Vec<DimensionResult>,
    pub responses: Vec<Likert>,
}

impl Assessment {
    pub fn base_type(&self) -> BaseType {
        self.personality_type.base
    }

    pub fn identity(&self) -> Identity {
        self.personality_type.identity
    }
}
