
pub const ALPHABET : &[u8] = "abcdefghijklmnopqrstuvwxyz'".as_bytes();

pub const APOSTROPHE_IDX: usize = 26;

/// Canonical symbol code shared by insertion and lookup: letters of either
/// case fold to 0-25, the apostrophe is 26, anything else is not a
/// vocabulary symbol.
pub fn get_idx(a: char) -> Option<usize> {
    if a == '\'' {
        return Some(APOSTROPHE_IDX);
    }
    if a.is_ascii_alphabetic() {
        Some((a.to_ascii_lowercase() as u8 - 'a' as u8) as usize)
    } else {
        None
    }
}
