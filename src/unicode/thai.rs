//! Character classes of the Thai block used by the PUA fallback shaper.
//!
//! Only U+0E00..=U+0E7F is special-cased. Everything else classifies as
//! [ConsonantType::NotConsonant] and has no [MarkType].

/// Consonant class of a base character, by the shape of the glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConsonantType {
    /// Consonant with no ascender or descender.
    Normal,
    /// Consonant with a tall ascender that collides with above-base marks.
    Ascender,
    /// Consonant with a descender that can be removed.
    RingDescender,
    /// Consonant with a descender that must be kept.
    StrictDescender,
    NotConsonant,
}

/// Class of a Thai combining mark.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MarkType {
    AboveVowel,
    BelowVowel,
    Tone,
}

impl MarkType {
    pub const ALL: [MarkType; 3] = [MarkType::AboveVowel, MarkType::BelowVowel, MarkType::Tone];
}

pub fn is_thai(ch: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&ch)
}

pub fn consonant_type(ch: char) -> ConsonantType {
    match ch {
        // PO PLA, FO FA, FO FAN
        '\u{0E1B}' | '\u{0E1D}' | '\u{0E1F}' => ConsonantType::Ascender,
        // YO YING, THO THAN
        '\u{0E0D}' | '\u{0E10}' => ConsonantType::RingDescender,
        // DO CHADA, TO PATAK
        '\u{0E0E}' | '\u{0E0F}' => ConsonantType::StrictDescender,
        '\u{0E01}'..='\u{0E2E}' => ConsonantType::Normal,
        _ => ConsonantType::NotConsonant,
    }
}

/// Returns the mark class of `ch`, or `None` if `ch` is a base character.
pub fn mark_type(ch: char) -> Option<MarkType> {
    match ch {
        '\u{0E31}' | '\u{0E34}'..='\u{0E37}' | '\u{0E47}' | '\u{0E4D}'..='\u{0E4E}' => {
            Some(MarkType::AboveVowel)
        }
        '\u{0E38}'..='\u{0E3A}' => Some(MarkType::BelowVowel),
        '\u{0E48}'..='\u{0E4C}' => Some(MarkType::Tone),
        _ => None,
    }
}

/// U+0E33 THAI CHARACTER SARA AM
pub fn is_sara_am(ch: char) -> bool {
    ch == '\u{0E33}'
}

/// Marks that sit above the base and are moved before the NIKHAHIT of a decomposed SARA AM.
pub fn is_abovebase_mark(ch: char) -> bool {
    match ch {
        '\u{0E31}' => true,
        '\u{0E34}'..='\u{0E37}' => true,
        '\u{0E47}'..='\u{0E4E}' => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_general_category::{get_general_category, GeneralCategory};

    fn thai_block() -> impl Iterator<Item = char> {
        ('\u{0E00}'..='\u{0E7F}').filter(|&ch| get_general_category(ch) != GeneralCategory::Unassigned)
    }

    mod consonant_type {
        use super::*;

        #[test]
        fn test_irregular_consonants() {
            assert_eq!(consonant_type('\u{0E1B}'), ConsonantType::Ascender);
            assert_eq!(consonant_type('\u{0E1D}'), ConsonantType::Ascender);
            assert_eq!(consonant_type('\u{0E1F}'), ConsonantType::Ascender);
            assert_eq!(consonant_type('\u{0E0D}'), ConsonantType::RingDescender);
            assert_eq!(consonant_type('\u{0E10}'), ConsonantType::RingDescender);
            assert_eq!(consonant_type('\u{0E0E}'), ConsonantType::StrictDescender);
            assert_eq!(consonant_type('\u{0E0F}'), ConsonantType::StrictDescender);
        }

        #[test]
        fn test_range_bounds() {
            assert_eq!(consonant_type('\u{0E00}'), ConsonantType::NotConsonant);
            assert_eq!(consonant_type('\u{0E01}'), ConsonantType::Normal);
            assert_eq!(consonant_type('\u{0E2E}'), ConsonantType::Normal);
            assert_eq!(consonant_type('\u{0E2F}'), ConsonantType::NotConsonant);
        }

        #[test]
        fn test_non_thai() {
            assert_eq!(consonant_type('a'), ConsonantType::NotConsonant);
            assert_eq!(consonant_type('\u{0E81}'), ConsonantType::NotConsonant);
            assert_eq!(consonant_type('\u{F700}'), ConsonantType::NotConsonant);
        }

        #[test]
        fn test_consonants_are_letters() {
            for ch in thai_block() {
                if consonant_type(ch) != ConsonantType::NotConsonant {
                    assert_eq!(
                        get_general_category(ch),
                        GeneralCategory::OtherLetter,
                        "U+{:04X}",
                        ch as u32
                    );
                }
            }
        }
    }

    mod mark_type {
        use super::*;

        #[test]
        fn test_mark_classes() {
            assert_eq!(mark_type('\u{0E31}'), Some(MarkType::AboveVowel));
            assert_eq!(mark_type('\u{0E36}'), Some(MarkType::AboveVowel));
            assert_eq!(mark_type('\u{0E47}'), Some(MarkType::AboveVowel));
            assert_eq!(mark_type('\u{0E4E}'), Some(MarkType::AboveVowel));
            assert_eq!(mark_type('\u{0E3A}'), Some(MarkType::BelowVowel));
            assert_eq!(mark_type('\u{0E48}'), Some(MarkType::Tone));
            assert_eq!(mark_type('\u{0E4C}'), Some(MarkType::Tone));
        }

        #[test]
        fn test_base_characters() {
            assert_eq!(mark_type('\u{0E01}'), None);
            assert_eq!(mark_type('\u{0E32}'), None);
            assert_eq!(mark_type('\u{0E33}'), None);
            assert_eq!(mark_type('\u{0E40}'), None);
            assert_eq!(mark_type('\u{0E51}'), None);
            assert_eq!(mark_type(' '), None);
        }

        #[test]
        fn test_marks_are_nonspacing() {
            for ch in thai_block() {
                let is_mn = get_general_category(ch) == GeneralCategory::NonspacingMark;
                assert_eq!(mark_type(ch).is_some(), is_mn, "U+{:04X}", ch as u32);
            }
        }
    }

    #[test]
    fn test_consonant_and_mark_exclusive() {
        for ch in '\u{0E00}'..='\u{0E7F}' {
            let consonant = consonant_type(ch) != ConsonantType::NotConsonant;
            let mark = mark_type(ch).is_some();
            assert!(!(consonant && mark), "U+{:04X}", ch as u32);
        }
    }

    #[test]
    fn test_neither_consonant_nor_mark() {
        // digits and punctuation
        for ch in ['\u{0E2F}', '\u{0E3F}', '\u{0E46}', '\u{0E4F}', '\u{0E50}', '\u{0E5B}'] {
            assert_eq!(consonant_type(ch), ConsonantType::NotConsonant);
            assert_eq!(mark_type(ch), None);
        }
    }

    #[test]
    fn test_abovebase_marks() {
        assert!(is_abovebase_mark('\u{0E31}'));
        assert!(is_abovebase_mark('\u{0E48}'));
        assert!(is_abovebase_mark('\u{0E4E}'));
        assert!(!is_abovebase_mark('\u{0E38}'));
        assert!(!is_abovebase_mark('\u{0E32}'));
    }
}
