//! Text normalization shared by ownership matching and category naming.
//!
//! Stored records accumulated over several rewrites of the application,
//! so every comparison against stored text goes through one of these
//! helpers instead of ad-hoc `to_lowercase()` calls.

/// Full fold: trim, lowercase, strip diacritics.
///
/// Used for category names, where `"Catégorie"` and `"categorie "` must
/// compare equal.
pub fn fold(input: &str) -> String {
    input
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
        .collect()
}

/// Email fold: trim and lowercase only.
///
/// Email local parts are case-insensitive in practice here, but accented
/// characters are kept significant.
pub fn fold_email(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Identifier fold: trim only.
///
/// Historical records stored ids both as numbers and strings; by the time
/// they reach Rust they are strings, so equality after trimming matches
/// the legacy coerce-to-string comparison.
pub fn fold_id(input: &str) -> &str {
    input.trim()
}

/// Maps accented Latin characters onto their base letter.
///
/// Covers the Latin-1 range found in the stored data (French titles and
/// category names). Characters outside the table pass through unchanged.
fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
