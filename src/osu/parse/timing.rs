//! Extractor of the TimingPoints section.

use std::str::FromStr;

use crate::osu::{lex::LexOutput, mixin::SourceRangeMixinExt, model::timing::TimingPoint};

use super::{ParseOutput, ParseWarning, parse_decimal, parse_unsigned};

/// Parses the record `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`.
///
/// `time` and `beatLength` are decimals which may be negative or fractional, `uninherited` is
/// `0` or `1`, and the others are non-negative integers. Surrounding spaces of each field are
/// ignored.
impl FromStr for TimingPoint {
    type Err = ParseWarning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseWarning::MalformedTimingPoint(s.to_owned());
        let fields: Vec<_> = s.split(',').map(str::trim).collect();
        let &[
            time,
            beat_length,
            meter,
            sample_set,
            sample_index,
            volume,
            uninherited,
            effects,
        ] = fields.as_slice()
        else {
            return Err(malformed());
        };
        let uninherited = match uninherited {
            "0" => false,
            "1" => true,
            _ => return Err(malformed()),
        };
        Ok(Self {
            time: parse_decimal(time).ok_or_else(malformed)?,
            beat_length: parse_decimal(beat_length).ok_or_else(malformed)?,
            meter: parse_unsigned(meter).ok_or_else(malformed)?,
            sample_set: parse_unsigned(sample_set).ok_or_else(malformed)?,
            sample_index: parse_unsigned(sample_index).ok_or_else(malformed)?,
            volume: parse_unsigned(volume).ok_or_else(malformed)?,
            uninherited,
            effects: parse_unsigned(effects).ok_or_else(malformed)?,
        })
    }
}

/// Extracts timing points from the TimingPoints section, sorted by time.
///
/// A missing section yields no timing points. Lines that are not a complete record are dropped.
/// Points at the same time keep their source order.
pub fn parse_timing_points(lex: &LexOutput<'_>) -> ParseOutput<Vec<TimingPoint>> {
    let mut parse_warnings = vec![];
    let Some(section) = lex.section("TimingPoints") else {
        return ParseOutput {
            value: vec![],
            parse_warnings,
        };
    };

    let mut points: Vec<TimingPoint> = section
        .records()
        .filter_map(|line| match line.content().trim().parse::<TimingPoint>() {
            Ok(point) => Some(point),
            Err(warning) => {
                log::debug!("dropping timing point line: {}", line.content());
                parse_warnings.push(warning.into_wrapper_range(line.range()));
                None
            }
        })
        .collect();
    points.sort_by(|a, b| a.time.total_cmp(&b.time));

    ParseOutput {
        value: points,
        parse_warnings,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::lex::parse_lex;

    #[test]
    fn parses_and_sorts() {
        const SRC: &str = "[TimingPoints]
1000,-50,4,2,0,60,0,1
// bpm change
0,333.33,4,1,0,70,1,0

-20.5,500,3,1,1,100,1,8
";
        let ParseOutput {
            value,
            parse_warnings,
        } = parse_timing_points(&parse_lex(SRC));
        assert_eq!(parse_warnings, vec![]);
        assert_eq!(
            value.iter().map(|p| p.time).collect::<Vec<_>>(),
            vec![-20.5, 0.0, 1000.0]
        );
        assert_eq!(
            value[1],
            TimingPoint {
                time: 0.0,
                beat_length: 333.33,
                meter: 4,
                sample_set: 1,
                sample_index: 0,
                volume: 70,
                uninherited: true,
                effects: 0,
            }
        );
        assert!(!value[2].uninherited);
        assert_eq!(value[2].beat_length, -50.0);
    }

    #[test]
    fn drops_malformed_lines() {
        const SRC: &str = "[TimingPoints]
0,500,4,1,0,70
0,500,4,1,0,70,2,0
x,500,4,1,0,70,1,0
0,500,4,1,0,-70,1,0
0,500,4,1,0,70,1,0,9
250,500,4,1,0,70,1,0
";
        let ParseOutput {
            value,
            parse_warnings,
        } = parse_timing_points(&parse_lex(SRC));
        assert_eq!(value.len(), 1);
        assert_eq!(value[0].time, 250.0);
        assert_eq!(parse_warnings.len(), 5);
        assert_eq!(
            parse_warnings[0].content(),
            &ParseWarning::MalformedTimingPoint("0,500,4,1,0,70".into())
        );
    }

    #[test]
    fn equal_times_keep_source_order() {
        const SRC: &str = "[TimingPoints]
500,400,4,1,0,70,1,0
500,-100,4,1,0,30,0,0
";
        let value = parse_timing_points(&parse_lex(SRC)).value;
        assert!(value[0].uninherited);
        assert!(!value[1].uninherited);
    }

    #[test]
    fn stops_at_next_section() {
        const SRC: &str = "[TimingPoints]
0,500,4,1,0,70,1,0

[Colours]
1,2,3,4,5,6,1,7
";
        assert_eq!(parse_timing_points(&parse_lex(SRC)).value.len(), 1);
    }

    #[test]
    fn missing_section_yields_nothing() {
        let ParseOutput {
            value,
            parse_warnings,
        } = parse_timing_points(&parse_lex("[HitObjects]\n"));
        assert_eq!(value, vec![]);
        assert_eq!(parse_warnings, vec![]);
    }
}
