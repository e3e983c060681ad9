//! Extractor of the General, Metadata and Difficulty sections.

use std::str::FromStr;

use crate::osu::{
    lex::{LexOutput, LineWithRange, Section},
    mixin::SourceRangeMixinExt,
    model::metadata::Metadata,
};

use super::{ParseOutput, ParseWarning, ParseWarningWithRange};

/// Looks up `Key:` values in one section, recording values failing to convert.
struct SectionReader<'s, 'a> {
    section: Option<&'s Section<'a>>,
    warnings: &'s mut Vec<ParseWarningWithRange>,
}

impl<'s, 'a> SectionReader<'s, 'a> {
    /// Finds the first line starting with `key:`, ignoring case, and returns it with the value.
    fn find(&self, key: &str) -> Option<(&'s LineWithRange<'a>, &'a str)> {
        self.section?.lines.iter().find_map(|line| {
            let content: &'a str = *line.content();
            let content = content.trim_start();
            let name = content.get(..key.len())?;
            let value = content[key.len()..].strip_prefix(':')?;
            name.eq_ignore_ascii_case(key).then_some((line, value))
        })
    }

    fn string(&self, key: &str) -> Option<String> {
        self.find(key).map(|(_, value)| value.trim().to_owned())
    }

    fn parsed<T: FromStr>(&mut self, key: &str, accept: impl FnOnce(&T) -> bool) -> Option<T> {
        let (line, value) = self.find(key)?;
        let value = value.trim();
        let parsed = value.parse::<T>().ok().filter(accept);
        if parsed.is_none() {
            log::debug!("dropping invalid metadata value `{value}` for `{key}`");
            self.warnings.push(
                ParseWarning::InvalidMetadataValue {
                    key: key.to_owned(),
                    value: value.to_owned(),
                }
                .into_wrapper_range(line.range()),
            );
        }
        parsed
    }

    fn integer<T: FromStr>(&mut self, key: &str) -> Option<T> {
        self.parsed(key, |_| true)
    }

    fn float(&mut self, key: &str) -> Option<f64> {
        self.parsed(key, |value: &f64| value.is_finite())
    }
}

/// Extracts [`Metadata`] from the General, Metadata and Difficulty sections.
///
/// Missing sections and keys leave their fields `None`. A malformed number affects only its
/// own field.
pub fn parse_metadata(lex: &LexOutput<'_>) -> ParseOutput<Metadata> {
    let mut parse_warnings = vec![];

    let mut general = SectionReader {
        section: lex.section("General"),
        warnings: &mut parse_warnings,
    };
    let audio_filename = general.string("AudioFilename");
    let audio_lead_in = general.integer("AudioLeadIn");
    let preview_time = general.integer("PreviewTime");
    let mode = general.integer("Mode");

    let mut meta = SectionReader {
        section: lex.section("Metadata"),
        warnings: &mut parse_warnings,
    };
    let title = meta.string("Title");
    let title_unicode = meta.string("TitleUnicode");
    let artist = meta.string("Artist");
    let artist_unicode = meta.string("ArtistUnicode");
    let creator = meta.string("Creator");
    let version = meta.string("Version");
    let source = meta.string("Source");
    let tags = meta
        .string("Tags")
        .map(|tags| tags.split_whitespace().map(ToOwned::to_owned).collect());
    let beatmap_id = meta.integer("BeatmapID");
    let beatmap_set_id = meta.integer("BeatmapSetID");

    let mut difficulty = SectionReader {
        section: lex.section("Difficulty"),
        warnings: &mut parse_warnings,
    };
    let hp_drain_rate = difficulty.float("HPDrainRate");
    let circle_size = difficulty.float("CircleSize");
    let overall_difficulty = difficulty.float("OverallDifficulty");

    ParseOutput {
        value: Metadata {
            audio_filename,
            audio_lead_in,
            preview_time,
            mode,
            title,
            title_unicode,
            artist,
            artist_unicode,
            creator,
            version,
            source,
            tags,
            beatmap_id,
            beatmap_set_id,
            hp_drain_rate,
            circle_size,
            overall_difficulty,
        },
        parse_warnings,
    }
}
