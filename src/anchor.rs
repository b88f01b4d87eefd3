/// GitHub-style anchor slug from heading text: lowercase, strip
/// punctuation, spaces become hyphens. Deliberately simple — no
/// numeric suffixes for repeated headings.
pub fn anchor(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        // Keep word chars (letters, digits, underscore), whitespace, hyphen.
        if ch.is_alphanumeric() || ch == '_' || ch == '-' || ch.is_whitespace() {
            if ch == ' ' {
                slug.push('-');
            } else {
                for lower in ch.to_lowercase() {
                    slug.push(lower);
                }
            }
        }
    }
    slug
}
