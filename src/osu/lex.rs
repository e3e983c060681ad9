//! Section lexer of the osu! beatmap format.
//!
//! Raw [`str`] == [`parse_lex`] ==> [`Section`]s (in [`LexOutput`]) == [`crate::osu::parse`] ==>
//! [`crate::osu::model::ParsedMap`]
//!
//! The format is a list of `[Name]` headers, each followed by its body lines. The lexer does
//! not interpret bodies; it only keeps every line together with its byte range so that the
//! extractors can report where a record came from.

pub mod cursor;

use super::mixin::{SourceRangeMixin, SourceRangeMixinExt};

use self::cursor::Cursor;

/// The prefix of the first line, followed by the format version number.
const FORMAT_VERSION_PREFIX: &str = "osu file format v";

/// A line of the source with its byte range.
pub type LineWithRange<'a> = SourceRangeMixin<&'a str>;

/// A section, from its `[Name]` header up to the next header or the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// The name between the brackets, as written in the source.
    pub name: &'a str,
    /// The header line with its byte range.
    pub header: LineWithRange<'a>,
    /// The body lines, in source order, including blank and comment lines.
    pub lines: Vec<LineWithRange<'a>>,
}

impl<'a> Section<'a> {
    /// Iterates the body lines carrying a record, skipping blank lines, `//` comments and
    /// header-like lines.
    pub fn records(&self) -> impl Iterator<Item = &LineWithRange<'a>> {
        self.lines.iter().filter(|line| is_record(line.content()))
    }
}

/// Whether the line can carry a record.
fn is_record(line: &str) -> bool {
    let line = line.trim();
    !(line.is_empty() || line.starts_with("//") || line.starts_with('['))
}

/// Lex results: the format version line and the sections in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexOutput<'a> {
    /// The version number in `osu file format vN`, if the text starts with it.
    pub format_version: Option<u32>,
    /// Sections in source order.
    pub sections: Vec<Section<'a>>,
}

impl<'a> LexOutput<'a> {
    /// Finds the first section whose name matches `name` case-insensitively.
    pub fn section(&self, name: &str) -> Option<&Section<'a>> {
        self.sections
            .iter()
            .find(|section| section.name.eq_ignore_ascii_case(name))
    }
}

/// Splits the beatmap text into sections.
pub fn parse_lex(source: &str) -> LexOutput<'_> {
    let mut cursor = Cursor::new(source);
    let mut output = LexOutput::default();
    let mut seen_content = false;

    while let Some((range, line)) = cursor.next_line_with_range() {
        let trimmed = line.trim().trim_start_matches('\u{feff}');
        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header.split_once(']').map_or(header, |(name, _)| name).trim();
            output.sections.push(Section {
                name,
                header: line.into_wrapper_range(range),
                lines: vec![],
            });
            seen_content = true;
            continue;
        }
        if let Some(section) = output.sections.last_mut() {
            section.lines.push(line.into_wrapper_range(range));
            continue;
        }
        if !seen_content && !trimmed.is_empty() {
            seen_content = true;
            output.format_version = trimmed
                .strip_prefix(FORMAT_VERSION_PREFIX)
                .and_then(|version| version.trim().parse().ok());
            if output.format_version.is_none() {
                log::debug!("line {} is not a format version line", cursor.line() - 1);
            }
        }
    }
    output
}
