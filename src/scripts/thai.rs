//! Fallback shaping for Thai fonts that have no GPOS mark positioning.
//!
//! Fonts in the legacy Thai layout carry pre-positioned copies of the combining marks in the
//! Private Use Area. This module rewrites marks (and occasionally the base consonant) to those
//! copies so that tone marks don't collide with above-base vowels or ascenders, and below-base
//! vowels don't collide with descenders. It works at the character level; mapping the result
//! to glyphs is up to the caller.
//!
//! The usual entry point is [apply_pua_fallback], which runs [preprocess] followed by
//! [shape_in_place].

mod machine;
mod pua;

use bitflags::bitflags;
use log::debug;

use crate::unicode::thai::{consonant_type, is_abovebase_mark, is_sara_am, mark_type, ConsonantType};

pub use machine::{AboveState, Action, BelowState};
pub use pua::pua_shape;

const NIKHAHIT: char = '\u{0E4D}';
const SARA_AA: char = '\u{0E32}';

bitflags! {
    /// Selects which rewrites the PUA fallback performs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PuaFeatures: u8 {
        const SHIFT_DOWN       = 0b00000001;
        const SHIFT_LEFT       = 0b00000010;
        const SHIFT_DOWN_LEFT  = 0b00000100;
        const REMOVE_DESCENDER = 0b00001000;
        /// Decompose SARA AM before shaping.
        const DECOMPOSE_AM     = 0b00010000;
    }
}

impl Default for PuaFeatures {
    fn default() -> Self {
        PuaFeatures::all()
    }
}

impl Action {
    fn enabled(self, features: PuaFeatures) -> bool {
        match self {
            Action::Nop => false,
            Action::ShiftDown => features.contains(PuaFeatures::SHIFT_DOWN),
            Action::ShiftLeft => features.contains(PuaFeatures::SHIFT_LEFT),
            Action::ShiftDownLeft => features.contains(PuaFeatures::SHIFT_DOWN_LEFT),
            Action::RemoveDescender => features.contains(PuaFeatures::REMOVE_DESCENDER),
        }
    }
}

/// Decompose U+0E33 SARA AM into NIKHAHIT and SARA AA.
///
/// A tone mark or other above-base mark directly before the SARA AM is moved after the
/// NIKHAHIT, so that `ก่ำ` becomes `ก ํ ่ า`.
pub fn preprocess(cs: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(cs.len() + cs.len() / 2);
    for &ch in cs {
        if !is_sara_am(ch) {
            out.push(ch);
            continue;
        }

        match out.last_mut() {
            Some(last) if is_abovebase_mark(*last) => {
                let mark = std::mem::replace(last, NIKHAHIT);
                debug!("thai: reorder U+{:04X} after nikhahit", mark as u32);
                out.push(mark);
                out.push(SARA_AA);
            }
            _ => {
                out.push(NIKHAHIT);
                out.push(SARA_AA);
            }
        }
    }
    out
}

pub fn preprocess_str(text: &str) -> String {
    let cs: Vec<char> = text.chars().collect();
    preprocess(&cs).into_iter().collect()
}

/// Rewrite marks in `cs` to their PUA variants where they would collide with the base or with
/// one another. The output has the same length as the input.
pub fn shape(cs: &[char]) -> Vec<char> {
    shape_with(cs, PuaFeatures::default())
}

pub fn shape_with(cs: &[char], features: PuaFeatures) -> Vec<char> {
    let mut out = cs.to_vec();
    shape_in_place(&mut out, features);
    out
}

pub fn shape_str(text: &str) -> String {
    let mut cs: Vec<char> = text.chars().collect();
    shape_in_place(&mut cs, PuaFeatures::default());
    cs.into_iter().collect()
}

/// Shape `cs` in place.
///
/// Each character is rewritten at most once, and only the base consonant rewrite reaches back
/// to an earlier position, which is never touched again in that cluster. So reading from the
/// buffer being written gives the same result as shaping into a copy.
pub fn shape_in_place(cs: &mut [char], features: PuaFeatures) {
    let mut above_state = AboveState::start(ConsonantType::NotConsonant);
    let mut below_state = BelowState::start(ConsonantType::NotConsonant);
    let mut base = 0;

    for i in 0..cs.len() {
        let ch = cs[i];
        let mark = match mark_type(ch) {
            Some(mark) => mark,
            None => {
                let consonant = consonant_type(ch);
                above_state = AboveState::start(consonant);
                below_state = BelowState::start(consonant);
                base = i;
                continue;
            }
        };

        let (above_action, next_above) = above_state.next(mark);
        let (below_action, next_below) = below_state.next(mark);
        above_state = next_above;
        below_state = next_below;

        // At least one of the above/below actions is Nop.
        debug_assert!(above_action == Action::Nop || below_action == Action::Nop);
        let action = if above_action != Action::Nop {
            above_action
        } else {
            below_action
        };
        if !action.enabled(features) {
            continue;
        }

        let index = if action == Action::RemoveDescender { base } else { i };
        let shaped = pua_shape(cs[index], action);
        if shaped != cs[index] {
            debug!(
                "thai pua {:?}: U+{:04X} -> U+{:04X}",
                action, cs[index] as u32, shaped as u32
            );
            cs[index] = shaped;
        }
    }
}

/// Decompose SARA AM (if enabled) then shape `cs`.
pub fn apply_pua_fallback(cs: &mut Vec<char>, features: PuaFeatures) {
    if features.contains(PuaFeatures::DECOMPOSE_AM) {
        *cs = preprocess(cs);
    }
    shape_in_place(cs, features);
}

pub fn shape_text(text: &str, features: PuaFeatures) -> String {
    let mut cs: Vec<char> = text.chars().collect();
    apply_pua_fallback(&mut cs, features);
    cs.into_iter().collect()
}
