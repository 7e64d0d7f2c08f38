//! Re-casing replacements to match the surface form they replace.

/// Re-case `replacement` to follow the casing of `surface`.
///
/// - An all-uppercase surface (`CAN'T`) produces an all-uppercase replacement.
/// - A surface whose first letter is uppercase (`Can't`, `'Tis`) capitalizes
///   the first letter of the replacement and keeps the rest as stored.
/// - Anything else returns the replacement as stored.
pub fn match_case(surface: &str, replacement: &str) -> String {
    if is_all_uppercase(surface) {
        replacement.to_uppercase()
    } else if first_letter_is_uppercase(surface) {
        capitalize_first_letter(replacement)
    } else {
        replacement.to_string()
    }
}

/// At least one cased character and no lowercase ones.
pub fn is_all_uppercase(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn first_letter_is_uppercase(s: &str) -> bool {
    s.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase)
}

fn capitalize_first_letter(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut done = false;
    for c in s.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}
