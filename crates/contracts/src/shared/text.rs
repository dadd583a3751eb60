use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters with a built-in stroke and ligatures, which NFD leaves whole
fn fold_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ŧ' => "t",
        'ı' => "i",
        'ƀ' => "b",
        'ɨ' => "i",
        'ƶ' => "z",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        'ĳ' => "ij",
        _ => return None,
    };
    Some(folded)
}

/// Lowercased text with diacritics stripped: "Évènement" becomes "evenement",
/// "Łódź" becomes "lodz"
pub fn fold_accents(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }
    folded
}

/// Accent and case insensitive substring test
///
/// An empty `needle` matches every haystack, the empty one included.
pub fn contains_without_accents(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold_accents(haystack).contains(&fold_accents(needle))
}
