//! The osu! beatmap (.osu) parser, focused on the mania mode.
//!
//! The [`osu`] module turns the text of a beatmap into a [`osu::model::ParsedMap`]: metadata,
//! timing points and hit objects with their derived columns and hold end times, plus a
//! summary of the chart. Parsing is lenient, dropping malformed records with warnings.
//!
//! # Features
//!
//! - `diagnostics` (default): renders warnings with `ariadne`, see [`diagnostics`].
//! - `serde`: derives `Serialize` and `Deserialize` for the parsed structures and warnings.
//!
//! # Example
//!
//! ```
//! use osu_mania_rs::osu::prelude::*;
//!
//! let source = r"osu file format v14
//!
//! [Metadata]
//! Title:Example
//!
//! [Difficulty]
//! CircleSize:4
//!
//! [TimingPoints]
//! 0,500,4,1,0,70,1,0
//!
//! [HitObjects]
//! 64,192,0,1,0,0:0:0:0:
//! 448,192,500,128,0,1500:0:0:0:0:
//! ";
//! let OsuOutput { map, warnings } = parse_osu(source, default_config()).unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(map.metadata.title.as_deref(), Some("Example"));
//! assert_eq!(map.long_note_count, 1);
//! assert_eq!(map.duration, 1500);
//! assert_eq!(map.bpm_range(), Some((120.0, 120.0)));
//!
//! let lanes = organize_notes_by_column(&map.hit_objects, map.key_count);
//! assert_eq!(lanes[3][0].end_time, 1500);
//! ```

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod osu;
