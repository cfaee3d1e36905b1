//! State machines tracking how crowded the above-base and below-base positions of a cluster are.
//!
//! Each base character resets both machines to a start state chosen by its [ConsonantType].
//! Every following mark advances both machines and yields one [Action] from each.

use crate::unicode::thai::{ConsonantType, MarkType};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    Nop,
    /// Shift combining mark down.
    ShiftDown,
    /// Shift combining mark left.
    ShiftLeft,
    /// Shift combining mark down-left.
    ShiftDownLeft,
    /// Remove descender from base.
    RemoveDescender,
}

/// Occupancy of the space above the base.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AboveState {
    // Cluster above looks like:
    T0, //  ⣤
    T1, //     ⣼
    T2, //        ⣾
    T3, //           ⣿
}

/// Descender of the base, and whether the space below it is taken.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BelowState {
    /// No descender
    B0,
    /// Removable descender
    B1,
    /// Strict descender
    B2,
}

type AboveEdge = (Action, AboveState);
type BelowEdge = (Action, BelowState);

// Columns are indexed by MarkType: AboveVowel, BelowVowel, Tone.
#[rustfmt::skip]
const ABOVE_MACHINE: [[AboveEdge; 3]; 4] = {
    use Action::*;
    use AboveState::*;
    [
        /* T0 */ [(Nop, T3),       (Nop, T0), (ShiftDown, T3)],
        /* T1 */ [(ShiftLeft, T2), (Nop, T1), (ShiftDownLeft, T2)],
        /* T2 */ [(Nop, T3),       (Nop, T2), (ShiftLeft, T3)],
        /* T3 */ [(Nop, T3),       (Nop, T3), (Nop, T3)],
    ]
};

#[rustfmt::skip]
const BELOW_MACHINE: [[BelowEdge; 3]; 3] = {
    use Action::*;
    use BelowState::*;
    [
        /* B0 */ [(Nop, B0), (Nop, B2),             (Nop, B0)],
        /* B1 */ [(Nop, B1), (RemoveDescender, B2), (Nop, B1)],
        /* B2 */ [(Nop, B2), (ShiftDown, B2),       (Nop, B2)],
    ]
};

fn mark_index(mark: MarkType) -> usize {
    match mark {
        MarkType::AboveVowel => 0,
        MarkType::BelowVowel => 1,
        MarkType::Tone => 2,
    }
}

impl AboveState {
    pub const ALL: [AboveState; 4] = [AboveState::T0, AboveState::T1, AboveState::T2, AboveState::T3];

    pub fn start(consonant: ConsonantType) -> AboveState {
        match consonant {
            ConsonantType::Normal => AboveState::T0,
            ConsonantType::Ascender => AboveState::T1,
            ConsonantType::RingDescender => AboveState::T0,
            ConsonantType::StrictDescender => AboveState::T0,
            ConsonantType::NotConsonant => AboveState::T3,
        }
    }

    pub fn next(self, mark: MarkType) -> (Action, AboveState) {
        ABOVE_MACHINE[self as usize][mark_index(mark)]
    }
}

impl BelowState {
    pub const ALL: [BelowState; 3] = [BelowState::B0, BelowState::B1, BelowState::B2];

    pub fn start(consonant: ConsonantType) -> BelowState {
        match consonant {
            ConsonantType::Normal => BelowState::B0,
            ConsonantType::Ascender => BelowState::B0,
            ConsonantType::RingDescender => BelowState::B1,
            ConsonantType::StrictDescender => BelowState::B2,
            ConsonantType::NotConsonant => BelowState::B2,
        }
    }

    pub fn next(self, mark: MarkType) -> (Action, BelowState) {
        BELOW_MACHINE[self as usize][mark_index(mark)]
    }
}
