//! The parser module of osu! beatmap (.osu) files, targeting the mania mode.
//!
//! This module consists of two phases: section lexing and record extraction.
//!
//! `lex` module splits the text into `[Name]` sections, keeping the byte range of every line.
//!
//! `parse` module provides the extractors of metadata, timing points and hit objects. They are
//! lenient: a malformed line is dropped with a warning, and only a missing `[HitObjects]`
//! section is fatal.
//!
//! `model` module provides the parsed records and the aggregate [`ParsedMap`]. `columns`
//! module groups hit objects into lanes.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `str` to input).
//! - Do not support writing beatmaps back to text.
//! - Do not validate beyond the shape of each record.

use std::str::FromStr;

use thiserror::Error;

pub mod columns;
pub mod lex;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;

use self::{
    lex::{LexOutput, parse_lex},
    model::{ParsedMap, metadata::Metadata},
    parse::{
        MAX_KEY_COUNT, MissingSectionError, ParseConfig, ParseOutput, ParseWarningWithRange,
        default_config, hit_object::parse_hit_objects, metadata::parse_metadata,
        timing::parse_timing_points,
    },
};

/// A recoverable problem found while parsing the beatmap.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OsuWarning {
    /// A record or value was dropped by an extractor.
    #[error("Warn: parse: {0}")]
    ParseWarning(#[from] ParseWarningWithRange),
    /// `CircleSize` is present but is not a key count in `1..=MAX_KEY_COUNT`.
    ///
    /// [`MAX_KEY_COUNT`]: crate::osu::parse::MAX_KEY_COUNT
    #[error("Warn: key count: `CircleSize` {circle_size} is not usable, using {fallback} keys")]
    UnusableKeyCount {
        /// The raw `CircleSize` value, formatted.
        circle_size: String,
        /// The key count used instead.
        fallback: u32,
    },
}

/// Output of parsing a beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsuOutput {
    /// The parsed beatmap.
    pub map: ParsedMap,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<OsuWarning>,
}

/// Resolves the key count from `CircleSize`, truncating it.
///
/// An absent `CircleSize` falls back silently. A present one out of `1..=MAX_KEY_COUNT` after
/// truncation, or not finite, falls back with a warning.
fn resolve_key_count(metadata: &Metadata, config: &ParseConfig) -> (u32, Option<OsuWarning>) {
    let fallback = config.default_key_count.clamp(1, MAX_KEY_COUNT);
    let Some(circle_size) = metadata.circle_size else {
        return (fallback, None);
    };
    let truncated = circle_size.trunc();
    if (1.0..=f64::from(MAX_KEY_COUNT)).contains(&truncated) {
        return (truncated as u32, None);
    }
    (
        fallback,
        Some(OsuWarning::UnusableKeyCount {
            circle_size: circle_size.to_string(),
            fallback,
        }),
    )
}

/// Parse a beatmap from source text.
///
/// # Errors
///
/// Returns [`MissingSectionError`] when the text has no `[HitObjects]` section. Every other
/// problem is recorded in [`OsuOutput::warnings`].
///
/// # Example
///
/// ```
/// use osu_mania_rs::osu::{OsuOutput, parse::default_config, parse_osu};
///
/// let source = "osu file format v14\n[Difficulty]\nCircleSize:4\n[HitObjects]\n64,192,1000,1,0,0:0:0:0:\n";
/// let OsuOutput { map, warnings } = parse_osu(source, default_config()).unwrap();
/// assert_eq!(map.note_count, 1);
/// assert_eq!(map.hit_objects[0].column, 0);
/// assert!(warnings.is_empty());
/// ```
pub fn parse_osu(source: &str, config: ParseConfig) -> parse::Result<OsuOutput> {
    let lex = parse_lex(source);
    parse_osu_with_lex(&lex, config)
}

/// Parse a beatmap from lexed sections.
///
/// A step of [`parse_osu`].
///
/// # Errors
///
/// Returns [`MissingSectionError`] when there is no `[HitObjects]` section.
pub fn parse_osu_with_lex(lex: &LexOutput<'_>, config: ParseConfig) -> parse::Result<OsuOutput> {
    let ParseOutput {
        value: metadata,
        parse_warnings: metadata_warnings,
    } = parse_metadata(lex);

    let (key_count, key_count_warning) = resolve_key_count(&metadata, &config);

    let ParseOutput {
        value: hit_objects,
        parse_warnings: hit_object_warnings,
    } = parse_hit_objects(lex, key_count, &config)?;

    let ParseOutput {
        value: timing_points,
        parse_warnings: timing_warnings,
    } = parse_timing_points(lex);

    let mut warnings: Vec<OsuWarning> = metadata_warnings
        .into_iter()
        .map(OsuWarning::ParseWarning)
        .collect();
    warnings.extend(key_count_warning);
    warnings.extend(hit_object_warnings.into_iter().map(OsuWarning::ParseWarning));
    warnings.extend(timing_warnings.into_iter().map(OsuWarning::ParseWarning));

    let map = ParsedMap::from_parts(
        lex.format_version,
        metadata,
        timing_points,
        hit_objects,
        key_count,
    );
    Ok(OsuOutput { map, warnings })
}

impl ParsedMap {
    /// Parses the source with [`default_config`], discarding warnings.
    ///
    /// # Errors
    ///
    /// Returns [`MissingSectionError`] when the text has no `[HitObjects]` section.
    pub fn parse(source: &str) -> parse::Result<Self> {
        parse_osu(source, default_config()).map(|output| output.map)
    }
}

impl FromStr for ParsedMap {
    type Err = MissingSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn metadata_with(circle_size: Option<f64>) -> Metadata {
        Metadata {
            circle_size,
            ..Default::default()
        }
    }

    #[test]
    fn key_count_fallbacks() {
        let config = default_config();
        assert_eq!(resolve_key_count(&metadata_with(None), &config), (4, None));
        assert_eq!(
            resolve_key_count(&metadata_with(Some(7.0)), &config),
            (7, None)
        );
        assert_eq!(
            resolve_key_count(&metadata_with(Some(7.9)), &config),
            (7, None)
        );
        assert_eq!(
            resolve_key_count(&metadata_with(Some(0.0)), &config),
            (
                4,
                Some(OsuWarning::UnusableKeyCount {
                    circle_size: "0".into(),
                    fallback: 4,
                })
            )
        );
        assert_eq!(
            resolve_key_count(&metadata_with(Some(-2.0)), &config.default_key_count(6)).0,
            6
        );
        assert_eq!(
            resolve_key_count(&metadata_with(Some(18.5)), &config),
            (18, None)
        );
        assert_eq!(
            resolve_key_count(&metadata_with(Some(1e10)), &config),
            (
                4,
                Some(OsuWarning::UnusableKeyCount {
                    circle_size: "10000000000".into(),
                    fallback: 4,
                })
            )
        );
    }

    #[test]
    fn summary_of_empty_section() {
        let map: ParsedMap = "[HitObjects]\n".parse().unwrap();
        assert_eq!(map.note_count, 0);
        assert_eq!(map.long_note_count, 0);
        assert_eq!(map.duration, 0);
        assert_eq!(map.key_count, 4);
        assert_eq!(map.bpm_range(), None);
    }
}
