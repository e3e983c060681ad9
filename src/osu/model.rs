//! Parsed structures of a beatmap.
//!
//! [`ParsedMap`] owns every record produced by a parse. Nothing in it borrows the source text.

pub mod hit_object;
pub mod metadata;
pub mod timing;

use itertools::{Itertools, MinMaxResult};

use super::columns::organize_notes_by_column;

use self::{hit_object::HitObject, metadata::Metadata, timing::TimingPoint};

/// A parsed beatmap with its summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedMap {
    /// The version in the `osu file format vN` line.
    pub format_version: Option<u32>,
    /// Metadata from the General, Metadata and Difficulty sections.
    pub metadata: Metadata,
    /// Timing points, sorted by time.
    pub timing_points: Vec<TimingPoint>,
    /// Hit objects, sorted by time.
    pub hit_objects: Vec<HitObject>,
    /// The number of hit objects.
    pub note_count: usize,
    /// The number of hold notes.
    pub long_note_count: usize,
    /// The latest end time over all hit objects, or `0` without hit objects.
    pub duration: i32,
    /// The key count used to derive [`HitObject::column`].
    pub key_count: u32,
}

impl ParsedMap {
    /// Assembles the map and computes its summary.
    pub(crate) fn from_parts(
        format_version: Option<u32>,
        metadata: Metadata,
        timing_points: Vec<TimingPoint>,
        hit_objects: Vec<HitObject>,
        key_count: u32,
    ) -> Self {
        let long_note_count = hit_objects.iter().filter(|obj| obj.is_long_note).count();
        let duration = hit_objects
            .iter()
            .map(|obj| obj.end_time)
            .max()
            .unwrap_or(0);
        Self {
            format_version,
            metadata,
            note_count: hit_objects.len(),
            long_note_count,
            duration,
            key_count,
            timing_points,
            hit_objects,
        }
    }

    /// The lowest and highest BPM over uninherited timing points.
    pub fn bpm_range(&self) -> Option<(f64, f64)> {
        match self
            .timing_points
            .iter()
            .filter_map(TimingPoint::bpm)
            .minmax_by(f64::total_cmp)
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(bpm) => Some((bpm, bpm)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Hit objects grouped by column, see [`organize_notes_by_column`].
    pub fn columns(&self) -> Vec<Vec<HitObject>> {
        organize_notes_by_column(&self.hit_objects, self.key_count)
    }
}
