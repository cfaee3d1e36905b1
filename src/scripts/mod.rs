pub mod thai;

use crate::tag;

use self::thai::PuaFeatures;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptType {
    Default,
    Thai,
}

impl From<u32> for ScriptType {
    fn from(script_tag: u32) -> Self {
        match script_tag {
            tag::THAI => ScriptType::Thai,
            _ => ScriptType::Default,
        }
    }
}

pub fn preprocess_text(cs: &mut Vec<char>, script_tag: u32) {
    match ScriptType::from(script_tag) {
        ScriptType::Default => {}
        ScriptType::Thai => *cs = thai::preprocess(cs),
    }
}

/// Rewrite `cs` for a font that positions marks with PUA glyphs instead of GPOS.
///
/// Text in scripts other than Thai is left unchanged.
pub fn apply_pua_fallback(cs: &mut Vec<char>, script_tag: u32, features: PuaFeatures) {
    match ScriptType::from(script_tag) {
        ScriptType::Default => {}
        ScriptType::Thai => thai::apply_pua_fallback(cs, features),
    }
}
