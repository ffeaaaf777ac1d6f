/// Longest slug, in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Substituted when nothing survives sanitizing.
pub const FALLBACK_SLUG: &str = "report";

/// Sanitize a file stem into a filesystem-safe slug.
///
/// Trims and lowercases the input, turns each run of whitespace into a single
/// `-`, then keeps only `a-z`, `0-9`, `-`, `_`, `.` and CJK unified
/// ideographs. The result is cut to [`MAX_SLUG_LEN`] characters and falls
/// back to [`FALLBACK_SLUG`] when empty.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_permitted(ch) {
            slug.push(ch);
        }
    }

    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Characters allowed to survive in a slug.
pub fn is_permitted(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '\u{4e00}'..='\u{9fff}')
}
