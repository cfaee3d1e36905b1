//! Private Use Area glyph variants for Thai marks and consonants.
//!
//! These code points follow the layout used by legacy Thai fonts (U+F700..=U+F71A), which
//! carry pre-positioned copies of the marks in place of GPOS mark attachment.

use super::machine::Action;

/// Returns the PUA variant of `ch` for `action`, or `ch` itself if there isn't one.
pub fn pua_shape(ch: char, action: Action) -> char {
    match action {
        Action::Nop => ch,
        Action::ShiftDown => match ch {
            '\u{0E48}' => '\u{F70A}', // MAI EK
            '\u{0E49}' => '\u{F70B}', // MAI THO
            '\u{0E4A}' => '\u{F70C}', // MAI TRI
            '\u{0E4B}' => '\u{F70D}', // MAI CHATTAWA
            '\u{0E4C}' => '\u{F70E}', // THANTHAKHAT
            '\u{0E38}' => '\u{F718}', // SARA U
            '\u{0E39}' => '\u{F719}', // SARA UU
            '\u{0E3A}' => '\u{F71A}', // PHINTHU
            _ => ch,
        },
        Action::ShiftDownLeft => match ch {
            '\u{0E48}' => '\u{F705}', // MAI EK
            '\u{0E49}' => '\u{F706}', // MAI THO
            '\u{0E4A}' => '\u{F707}', // MAI TRI
            '\u{0E4B}' => '\u{F708}', // MAI CHATTAWA
            '\u{0E4C}' => '\u{F709}', // THANTHAKHAT
            _ => ch,
        },
        Action::ShiftLeft => match ch {
            '\u{0E48}' => '\u{F713}', // MAI EK
            '\u{0E49}' => '\u{F714}', // MAI THO
            '\u{0E4A}' => '\u{F715}', // MAI TRI
            '\u{0E4B}' => '\u{F716}', // MAI CHATTAWA
            '\u{0E4C}' => '\u{F717}', // THANTHAKHAT
            '\u{0E31}' => '\u{F710}', // MAI HAN-AKAT
            '\u{0E34}' => '\u{F701}', // SARA I
            '\u{0E35}' => '\u{F702}', // SARA II
            '\u{0E36}' => '\u{F703}', // SARA UE
            '\u{0E37}' => '\u{F704}', // SARA UEE
            '\u{0E47}' => '\u{F712}', // MAITAIKHU
            '\u{0E4D}' => '\u{F711}', // NIKHAHIT
            _ => ch,
        },
        Action::RemoveDescender => match ch {
            '\u{0E0D}' => '\u{F70F}', // YO YING
            '\u{0E10}' => '\u{F700}', // THO THAN
            _ => ch,
        },
    }
}
