//! Extracting typed records from lexed sections.
//!
//! Raw [`str`] == [`crate::osu::lex`] ==> sections == [`parse`](self) ==> records (in
//! [`ParseOutput`])
//!
//! Every extractor is lenient: a malformed line or value never aborts the parse. It is dropped
//! and reported as a [`ParseWarning`] instead. The only fatal condition is a missing
//! `[HitObjects]` section, reported as [`MissingSectionError`].

pub mod hit_object;
pub mod metadata;
pub mod timing;

use thiserror::Error;

use super::mixin::SourceRangeMixin;

/// The default key count when the chart does not declare a usable one.
pub const DEFAULT_KEY_COUNT: u32 = 4;
/// The largest key count accepted from `CircleSize`.
pub const MAX_KEY_COUNT: u32 = 18;
/// The default width of the playfield in osu!pixels.
pub const DEFAULT_PLAYFIELD_WIDTH: u32 = 512;

/// A recoverable problem found while extracting records.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// A metadata value could not be converted to its type.
    #[error("invalid value `{value}` for key `{key}`")]
    InvalidMetadataValue {
        /// The key of the field.
        key: String,
        /// The raw value.
        value: String,
    },
    /// The line is not an 8-field timing point record.
    #[error("malformed timing point: {0}")]
    MalformedTimingPoint(String),
    /// The line does not start with 5 integer fields of a hit object.
    #[error("malformed hit object: {0}")]
    MalformedHitObject(String),
    /// The parameters of a hold note do not start with `endTime:a:b:c:`.
    #[error("undecodable hold note parameters: {0}")]
    UndecodableHoldEnd(String),
    /// The hold note is released before it is pressed.
    #[error("hold note ends at {end_time} before it starts at {time}")]
    HoldEndBeforeStart {
        /// The onset time.
        time: i32,
        /// The decoded release time.
        end_time: i32,
    },
}

/// A parse warning with the byte range of its source line.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

/// A required section was not found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("missing section: [{section}]")]
pub struct MissingSectionError {
    /// The name of the missing section.
    pub section: String,
}

/// Type alias of `core::result::Result<T, MissingSectionError>`
pub type Result<T> = core::result::Result<T, MissingSectionError>;

/// Records extracted by one extractor, with warnings about what was dropped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ParseOutput<T> {
    /// The extracted value.
    pub value: T,
    /// Warnings that occurred during extraction.
    pub parse_warnings: Vec<ParseWarningWithRange>,
}

/// Options of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// The key count used when `CircleSize` is absent or out of `1..=MAX_KEY_COUNT`.
    pub default_key_count: u32,
    /// The width of the playfield that `x` positions are divided by.
    pub playfield_width: u32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            default_key_count: DEFAULT_KEY_COUNT,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
        }
    }
}

impl ParseConfig {
    /// Sets the fallback key count. It is clamped to `1..=MAX_KEY_COUNT`.
    #[must_use]
    pub fn default_key_count(mut self, key_count: u32) -> Self {
        self.default_key_count = key_count.clamp(1, MAX_KEY_COUNT);
        self
    }

    /// Sets the playfield width. It is clamped to at least 1.
    #[must_use]
    pub fn playfield_width(mut self, width: u32) -> Self {
        self.playfield_width = width.max(1);
        self
    }
}

/// Creates the default [`ParseConfig`]: 4 keys and a 512 pixels wide playfield.
pub fn default_config() -> ParseConfig {
    ParseConfig::default()
}

/// Parses `-?\d+(\.\d+)?`.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    if !is_digits(int) || !frac.is_none_or(is_digits) {
        return None;
    }
    s.parse().ok()
}

/// Parses `-?\d+`.
pub(crate) fn parse_integer(s: &str) -> Option<i32> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    if !is_digits(unsigned) {
        return None;
    }
    s.parse().ok()
}

/// Parses `\d+`.
pub(crate) fn parse_unsigned(s: &str) -> Option<u32> {
    if !is_digits(s) {
        return None;
    }
    s.parse().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
