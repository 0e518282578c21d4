/// Upper-case the first letter of each whitespace-separated word.
///
/// Only the leading character of a word is touched; the rest is kept as-is,
/// so `"poison"` becomes `"Poison"` and `"mr. MIME"` becomes `"Mr. MIME"`.
/// Whitespace is preserved exactly.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
