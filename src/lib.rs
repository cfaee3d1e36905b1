#![warn(rust_2018_idioms)]

//! Thai mark positioning for fonts that lack GPOS mark attachment.
//!
//! Legacy Thai fonts carry pre-positioned copies of the combining marks and of the descender-less
//! consonants in the Private Use Area. Rewriting text to those code points before glyph lookup
//! gives correct mark placement without an OpenType layout engine:
//!
//! ```
//! use allsorts_thai_pua::scripts::thai::{preprocess, shape};
//!
//! // FO FA, MAI EK: the tone mark moves down-left to clear the ascender
//! let cs: Vec<char> = "\u{0E1D}\u{0E48}".chars().collect();
//! assert_eq!(shape(&preprocess(&cs)), vec!['\u{0E1D}', '\u{F705}']);
//! ```

pub mod error;
pub mod scripts;
pub mod tag;
pub mod unicode;

use crate::error::ShapingError;
use crate::scripts::thai::PuaFeatures;

pub use crate::scripts::thai::{preprocess, shape};

/// Convert a sequence of code points to characters.
pub fn from_codepoints(cps: &[u32]) -> Result<Vec<char>, ShapingError> {
    cps.iter()
        .map(|&cp| char::from_u32(cp).ok_or(ShapingError::InvalidCodepoint(cp)))
        .collect()
}

/// Apply the PUA fallback to `text` in the script named by `script`, e.g. `"thai"`.
pub fn shape_script(text: &str, script: &str, features: PuaFeatures) -> Result<String, ShapingError> {
    let script_tag = tag::from_string(script)?;
    let mut cs: Vec<char> = text.chars().collect();
    scripts::apply_pua_fallback(&mut cs, script_tag, features);
    Ok(cs.into_iter().collect())
}
