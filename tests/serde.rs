#![cfg(feature = "serde")]

use osu_mania_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn parsed_map_survives_json() {
    let source = include_str!("files/rainbow_4k.osu");
    let OsuOutput { map, .. } = parse_osu(source, default_config()).unwrap();

    let json = serde_json::to_string(&map).unwrap();
    let restored: ParsedMap = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
}

#[test]
fn warnings_serialize_with_span() {
    let source = "[HitObjects]\nbroken\n";
    let OsuOutput { warnings, .. } = parse_osu(source, default_config()).unwrap();
    let value = serde_json::to_value(&warnings).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "ParseWarning": {
                "content": { "MalformedHitObject": "broken" },
                "start": 13,
                "end": 19
            }
        }])
    );
}
