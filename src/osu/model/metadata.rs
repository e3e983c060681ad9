//! Definitions of the chart metadata.

/// The game mode selected by `Mode` of the General section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// osu!standard.
    Osu,
    /// osu!taiko.
    Taiko,
    /// osu!catch.
    Catch,
    /// osu!mania, the vertically scrolling key mode.
    Mania,
}

impl GameMode {
    /// Converts the raw `Mode` value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::Osu,
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            _ => return None,
        })
    }
}

/// Free-form chart metadata from the General, Metadata and Difficulty sections.
///
/// Every field is `None` when its section or key is missing, or when its value is malformed.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// The audio file name, relative to the chart. `AudioFilename`
    pub audio_filename: Option<String>,
    /// Milliseconds of silence before the audio starts. `AudioLeadIn`
    pub audio_lead_in: Option<i32>,
    /// Time in milliseconds where the song preview starts. `PreviewTime`
    pub preview_time: Option<i32>,
    /// The raw game mode selector. `Mode`
    pub mode: Option<i32>,
    /// Romanised song title. `Title`
    pub title: Option<String>,
    /// Song title in its original script. `TitleUnicode`
    pub title_unicode: Option<String>,
    /// Romanised song artist. `Artist`
    pub artist: Option<String>,
    /// Song artist in its original script. `ArtistUnicode`
    pub artist_unicode: Option<String>,
    /// The chart author. `Creator`
    pub creator: Option<String>,
    /// The difficulty name. `Version`
    pub version: Option<String>,
    /// Original media the song was produced for. `Source`
    pub source: Option<String>,
    /// Search terms, split by whitespace. `Tags`
    pub tags: Option<Vec<String>>,
    /// `BeatmapID`
    pub beatmap_id: Option<i64>,
    /// `BeatmapSetID`
    pub beatmap_set_id: Option<i64>,
    /// HP drain rate. `HPDrainRate`
    pub hp_drain_rate: Option<f64>,
    /// Circle size, which is the key count in mania mode. `CircleSize`
    pub circle_size: Option<f64>,
    /// Judgement strictness. `OverallDifficulty`
    pub overall_difficulty: Option<f64>,
}

impl Metadata {
    /// The game mode, if `Mode` is present and known.
    pub fn game_mode(&self) -> Option<GameMode> {
        self.mode.and_then(GameMode::from_raw)
    }
}
