//! Extractor of the HitObjects section.
//!
//! A record is `x,y,time,type,hitSound` followed by up to two optional fields: the 6th runs up
//! to the next comma, and the 7th is the rest of the line. For a hold note the 6th field is
//! `endTime:normalSet:additionSet:index:...`, from which only `endTime` is decoded.

use crate::osu::{
    lex::LexOutput,
    mixin::SourceRangeMixinExt,
    model::hit_object::{HOLD_BIT, HitObject, column_of},
};

use super::{
    MissingSectionError, ParseConfig, ParseOutput, ParseWarning, ParseWarningWithRange, Result,
    parse_integer, parse_unsigned,
};

/// The fields of a hit object line before derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawHitObject<'a> {
    x: i32,
    y: i32,
    time: i32,
    object_type: u32,
    hit_sound: u32,
    object_params: Option<&'a str>,
    hit_sample: Option<&'a str>,
}

impl<'a> RawHitObject<'a> {
    fn split(line: &'a str) -> Option<Self> {
        let mut fields = line.splitn(7, ',');
        let mut next_integer = || fields.next().map(str::trim).and_then(parse_integer);
        let x = next_integer()?;
        let y = next_integer()?;
        let time = next_integer()?;
        let mut next_unsigned = || fields.next().map(str::trim).and_then(parse_unsigned);
        let object_type = next_unsigned()?;
        let hit_sound = next_unsigned()?;
        Some(Self {
            x,
            y,
            time,
            object_type,
            hit_sound,
            object_params: fields.next(),
            hit_sample: fields.next(),
        })
    }
}

/// Decodes `endTime` of `endTime:a:b:c:rest`.
///
/// The parameters need at least the four colons. `rest` may contain further colons.
fn decode_hold_end(object_params: &str) -> Option<i32> {
    let parts: Vec<_> = object_params.splitn(5, ':').collect();
    let &[end_time, _, _, _, _] = parts.as_slice() else {
        return None;
    };
    parse_integer(end_time.trim())
}

/// Derives column and end time of a record, pushing a warning when the end time of a hold
/// note cannot be used.
fn derive(
    raw: RawHitObject<'_>,
    key_count: u32,
    config: &ParseConfig,
    warning: &mut Option<ParseWarning>,
) -> HitObject {
    let is_long_note = raw.object_type & HOLD_BIT != 0;
    let mut end_time = raw.time;
    if let Some(params) = raw.object_params.filter(|_| is_long_note) {
        match decode_hold_end(params) {
            Some(decoded) if decoded >= raw.time => end_time = decoded,
            Some(decoded) => {
                *warning = Some(ParseWarning::HoldEndBeforeStart {
                    time: raw.time,
                    end_time: decoded,
                });
            }
            None => *warning = Some(ParseWarning::UndecodableHoldEnd(params.to_owned())),
        }
    }
    HitObject {
        x: raw.x,
        y: raw.y,
        time: raw.time,
        object_type: raw.object_type,
        hit_sound: raw.hit_sound,
        object_params: raw.object_params.map(ToOwned::to_owned),
        hit_sample: raw.hit_sample.map(ToOwned::to_owned),
        column: column_of(raw.x, key_count, config.playfield_width.max(1)),
        is_long_note,
        end_time,
    }
}

/// Extracts hit objects from the HitObjects section, sorted by time.
///
/// # Errors
///
/// Returns [`MissingSectionError`] when the text has no `[HitObjects]` header. Malformed lines
/// are not errors; they are dropped and reported in [`ParseOutput::parse_warnings`].
pub fn parse_hit_objects(
    lex: &LexOutput<'_>,
    key_count: u32,
    config: &ParseConfig,
) -> Result<ParseOutput<Vec<HitObject>>> {
    let section = lex.section("HitObjects").ok_or_else(|| MissingSectionError {
        section: "HitObjects".to_owned(),
    })?;

    let mut parse_warnings: Vec<ParseWarningWithRange> = vec![];
    let mut hit_objects = vec![];
    for line in section.records() {
        let content: &str = line.content().trim();
        let Some(raw) = RawHitObject::split(content) else {
            log::debug!("dropping hit object line: {content}");
            parse_warnings.push(
                ParseWarning::MalformedHitObject(content.to_owned())
                    .into_wrapper_range(line.range()),
            );
            continue;
        };
        let mut warning = None;
        hit_objects.push(derive(raw, key_count, config, &mut warning));
        if let Some(warning) = warning {
            log::debug!("hold note at {} falls back to its onset: {warning}", raw.time);
            parse_warnings.push(warning.into_wrapper_range(line.range()));
        }
    }
    hit_objects.sort_by_key(|obj| obj.time);

    Ok(ParseOutput {
        value: hit_objects,
        parse_warnings,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::{lex::parse_lex, parse::default_config};

    fn parse(src: &str, key_count: u32) -> ParseOutput<Vec<HitObject>> {
        parse_hit_objects(&parse_lex(src), key_count, &default_config())
            .expect("HitObjects section must exist")
    }

    #[test]
    fn splits_optional_fields() {
        assert_eq!(
            RawHitObject::split("64,192,1000,1,0"),
            Some(RawHitObject {
                x: 64,
                y: 192,
                time: 1000,
                object_type: 1,
                hit_sound: 0,
                object_params: None,
                hit_sample: None,
            })
        );
        let raw = RawHitObject::split("64,192,1000,128,2,1500:0:0:0:0:,a,b").unwrap();
        assert_eq!(raw.object_params, Some("1500:0:0:0:0:"));
        assert_eq!(raw.hit_sample, Some("a,b"));
        assert_eq!(RawHitObject::split("64,192,1000,1"), None);
        assert_eq!(RawHitObject::split("64,192,soon,1,0"), None);
    }

    #[test]
    fn decodes_hold_end() {
        assert_eq!(decode_hold_end("5000:0:0:0:L1:1"), Some(5000));
        assert_eq!(decode_hold_end("5000:0:0:0:0:"), Some(5000));
        assert_eq!(decode_hold_end("5000:0:0:0"), None);
        assert_eq!(decode_hold_end("end:0:0:0:0:"), None);
    }

    #[test]
    fn derives_columns_and_long_notes() {
        const SRC: &str = "[HitObjects]
511,192,3000,1,0,0:0:0:0:
0,192,1000,128,0,5000:0:0:0:L1:1
192,192,2000,1,0,9999:0:0:0:0:
320,192,2500,5,0
";
        let ParseOutput {
            value,
            parse_warnings,
        } = parse(SRC, 4);
        assert_eq!(parse_warnings, vec![]);
        assert_eq!(
            value
                .iter()
                .map(|obj| (obj.time, obj.column, obj.is_long_note, obj.end_time))
                .collect::<Vec<_>>(),
            vec![
                (1000, 0, true, 5000),
                (2000, 1, false, 2000),
                (2500, 2, false, 2500),
                (3000, 3, false, 3000),
            ]
        );
        assert_eq!(value[0].object_params.as_deref(), Some("5000:0:0:0:L1:1"));
        assert_eq!(value[0].hold_duration(), 4000);
    }

    #[test]
    fn undecodable_hold_falls_back_to_onset() {
        const SRC: &str = "[HitObjects]
64,192,1000,128,0,1500:0:0
64,192,2000,128,0
64,192,3000,128,0,2500:0:0:0:0:
";
        let ParseOutput {
            value,
            parse_warnings,
        } = parse(SRC, 4);
        assert!(value.iter().all(|obj| obj.is_long_note));
        assert!(value.iter().all(|obj| obj.end_time == obj.time));
        assert_eq!(
            parse_warnings
                .into_iter()
                .map(|warning| warning.into_content())
                .collect::<Vec<_>>(),
            vec![
                ParseWarning::UndecodableHoldEnd("1500:0:0".into()),
                ParseWarning::HoldEndBeforeStart {
                    time: 3000,
                    end_time: 2500,
                },
            ]
        );
    }

    #[test]
    fn malformed_lines_do_not_stop_parsing() {
        const SRC: &str = "[HitObjects]
64,192
64,192,x,1,0
448,192,700,1,0,0:0:0:0:
";
        let ParseOutput {
            value,
            parse_warnings,
        } = parse(SRC, 4);
        assert_eq!(value.len(), 1);
        assert_eq!(value[0].column, 3);
        assert_eq!(parse_warnings.len(), 2);
    }

    #[test]
    fn missing_section_is_fatal() {
        let err = parse_hit_objects(&parse_lex("[Metadata]\nTitle:x\n"), 4, &default_config())
            .unwrap_err();
        assert_eq!(err.section, "HitObjects");
    }
}
