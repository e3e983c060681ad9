//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts the warnings carrying a [`SourceRangeMixin`] (such as
//! [`ParseWarningWithRange`] and the aggregated [`OsuWarning`]) and the fatal
//! [`MissingSectionError`] into `ariadne::Report`s.
//!
//! Since the warnings keep byte ranges into the source, ariadne handles row/column calculations
//! for display purposes.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_mania_rs::{
//!     diagnostics::emit_osu_warnings,
//!     osu::{parse::default_config, parse_osu},
//! };
//!
//! let source = "[TimingPoints]\n0,500,4\n[HitObjects]\n64,192,0,1,0\n";
//! let output = parse_osu(source, default_config()).unwrap();
//!
//! emit_osu_warnings("test.osu", source, &output.warnings);
//! ```
//!
//! [`SourceRangeMixin`]: crate::osu::mixin::SourceRangeMixin

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::osu::{
    OsuWarning,
    parse::{MissingSectionError, ParseWarningWithRange},
};

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_mania_rs::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("test.osu", "[HitObjects]\n");
/// assert_eq!(source.name(), "test.osu");
/// assert_eq!(source.text(), "[HitObjects]\n");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// `src` provides the file name; ariadne computes rows and columns from the byte ranges.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for ParseWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "parse",
            self.content(),
            Color::Blue,
        )
    }
}

impl ToAriadne for OsuWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::ParseWarning(warning) => warning.to_report(src),
            Self::UnusableKeyCount { .. } => {
                build_report(src, ReportKind::Warning, 0..0, "key count", self, Color::Yellow)
            }
        }
    }
}

impl ToAriadne for MissingSectionError {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        let end = src.text().len();
        build_report(
            src,
            ReportKind::Error,
            end..end,
            &self.to_string(),
            self,
            Color::Red,
        )
    }
}

/// Convenience method: batch render an [`OsuWarning`] list to stderr.
///
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete beatmap source text
/// * `warnings` - List of warnings to display
pub fn emit_osu_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a OsuWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of [`OsuWarning`] without printing.
#[must_use]
pub fn collect_osu_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a OsuWarning>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
