//! Definitions of hit objects, the notes of a chart.

/// The bit of [`HitObject::object_type`] marking a tappable note.
pub const NOTE_BIT: u32 = 1;
/// The bit of [`HitObject::object_type`] marking a hold (long) note.
pub const HOLD_BIT: u32 = 128;

/// A playable or holdable note event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Horizontal playfield position as written in the source, `0..512` by convention.
    pub x: i32,
    /// Vertical playfield position as written in the source.
    pub y: i32,
    /// The onset time in milliseconds.
    pub time: i32,
    /// Bit flags of the object type. Only [`NOTE_BIT`] and [`HOLD_BIT`] are interpreted.
    pub object_type: u32,
    /// The hit sound selector.
    pub hit_sound: u32,
    /// The raw 6th field, such as `endTime:hitSample` of a hold note.
    pub object_params: Option<String>,
    /// The raw rest of the line after the 6th field. It may contain commas.
    pub hit_sample: Option<String>,
    /// The lane index derived from [`HitObject::x`] and the key count. It can be out of
    /// `0..key_count` when `x` is out of the playfield.
    pub column: i64,
    /// Whether [`HOLD_BIT`] is set.
    pub is_long_note: bool,
    /// The release time of a hold note, or [`HitObject::time`] when there is none.
    pub end_time: i32,
}

impl HitObject {
    /// Whether [`NOTE_BIT`] is set.
    pub const fn is_note(&self) -> bool {
        self.object_type & NOTE_BIT != 0
    }

    /// The length of holding in milliseconds, zero for tap notes.
    pub const fn hold_duration(&self) -> u32 {
        self.end_time.abs_diff(self.time)
    }
}

/// Computes the lane index of the horizontal position, with flooring division.
pub const fn column_of(x: i32, key_count: u32, playfield_width: u32) -> i64 {
    (x as i64 * key_count as i64).div_euclid(playfield_width as i64)
}

#[cfg(test)]
mod tests {
    use super::{HOLD_BIT, HitObject, NOTE_BIT, column_of};

    #[test]
    fn column_edges() {
        assert_eq!(column_of(0, 4, 512), 0);
        assert_eq!(column_of(511, 4, 512), 3);
        assert_eq!(column_of(64, 4, 512), 0);
        assert_eq!(column_of(448, 4, 512), 3);
        assert_eq!(column_of(256, 7, 512), 3);
        assert_eq!(column_of(512, 4, 512), 4);
        assert_eq!(column_of(-1, 4, 512), -1);
        assert_eq!(column_of(i32::MAX, 18, 512), 75_497_471);
        assert_eq!(column_of(i32::MIN, 18, 512), -75_497_472);
        assert_eq!(column_of(i32::MAX, 4, 1), 8_589_934_588);
    }

    fn hold(time: i32, end_time: i32) -> HitObject {
        HitObject {
            x: 0,
            y: 192,
            time,
            object_type: HOLD_BIT,
            hit_sound: 0,
            object_params: None,
            hit_sample: None,
            column: 0,
            is_long_note: true,
            end_time,
        }
    }

    #[test]
    fn hold_duration_spans_whole_range() {
        assert_eq!(hold(1000, 1500).hold_duration(), 500);
        assert_eq!(hold(1000, 1000).hold_duration(), 0);
        assert_eq!(hold(i32::MIN, i32::MAX).hold_duration(), u32::MAX);
    }

    #[test]
    fn note_bit() {
        assert!(!hold(0, 0).is_note());
        let tap = HitObject {
            object_type: NOTE_BIT | 4,
            ..hold(0, 0)
        };
        assert!(tap.is_note());
    }
}
