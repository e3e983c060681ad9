//! Definitions of timing points, the tempo and sample control points.

use std::fmt;

/// The bit of [`TimingPoint::effects`] enabling kiai time.
pub const KIAI_BIT: u32 = 1;
/// The bit of [`TimingPoint::effects`] omitting the first bar line.
pub const OMIT_FIRST_BARLINE_BIT: u32 = 8;

/// A tempo or sample control point, applied forward in time until the next one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// The start time in milliseconds.
    pub time: f64,
    /// Milliseconds per beat. A negative value scales the previous tempo instead of replacing it.
    pub beat_length: f64,
    /// The numerator of the time signature.
    pub meter: u32,
    /// Default sample set for notes after this point.
    pub sample_set: u32,
    /// Custom sample index for notes after this point.
    pub sample_index: u32,
    /// Volume percentage for notes after this point.
    pub volume: u32,
    /// Whether this point defines an absolute tempo.
    pub uninherited: bool,
    /// Bit flags of extra effects.
    pub effects: u32,
}

impl TimingPoint {
    /// Beats per minute of an uninherited point.
    ///
    /// Returns `None` for inherited points and for non-positive beat lengths.
    pub fn bpm(&self) -> Option<f64> {
        (self.uninherited && self.beat_length > 0.0).then(|| 60_000.0 / self.beat_length)
    }

    /// Scroll speed multiplier of an inherited point, `-100 / beat_length`.
    ///
    /// Uninherited points and inherited points with a non-negative beat length yield `1.0`.
    pub fn speed_multiplier(&self) -> f64 {
        if self.uninherited || self.beat_length >= 0.0 {
            return 1.0;
        }
        -100.0 / self.beat_length
    }

    /// Whether kiai time is enabled from this point.
    pub const fn is_kiai(&self) -> bool {
        self.effects & KIAI_BIT != 0
    }

    /// Whether the first bar line of this point is omitted.
    pub const fn omits_first_barline(&self) -> bool {
        self.effects & OMIT_FIRST_BARLINE_BIT != 0
    }
}

/// Formats the canonical record
/// `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`.
impl fmt::Display for TimingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.time,
            self.beat_length,
            self.meter,
            self.sample_set,
            self.sample_index,
            self.volume,
            u8::from(self.uninherited),
            self.effects
        )
    }
}
