/// Convert code points known to be valid into characters.
#[allow(dead_code)]
pub fn chars(cps: &[u32]) -> Vec<char> {
    cps.iter()
        .map(|&cp| char::from_u32(cp).expect("invalid code point"))
        .collect()
}

#[allow(dead_code)]
pub fn codepoints(cs: &[char]) -> Vec<u32> {
    cs.iter().map(|&ch| ch as u32).collect()
}
