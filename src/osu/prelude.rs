//! Prelude module for the osu module.
//!
//! This module re-exports the public types for convenient access.
//! You can use `use osu_mania_rs::osu::prelude::*;` to import them at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_osu_warnings};

pub use super::{
    OsuOutput, OsuWarning,
    columns::organize_notes_by_column,
    lex::{LexOutput, Section, parse_lex},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        ParsedMap,
        hit_object::{HOLD_BIT, HitObject, NOTE_BIT},
        metadata::{GameMode, Metadata},
        timing::TimingPoint,
    },
    parse::{
        MissingSectionError, ParseConfig, ParseOutput, ParseWarning, ParseWarningWithRange,
        default_config,
    },
    parse_osu, parse_osu_with_lex,
};
