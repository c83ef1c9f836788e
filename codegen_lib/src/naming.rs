//! Declaration name derivation.

/// Convert a content type id into its declaration name.
///
/// PascalCase: non-alphanumeric separators are folded and the following
/// character is capitalized, interior case is preserved. A leading digit is
/// guarded with `_` so the result stays a valid identifier.
///
/// `blogPost` → `BlogPost`, `blog-post` → `BlogPost`.
pub fn declaration_name(id: &str) -> String {
    let mut result = String::with_capacity(id.len());
    let mut capitalize = true;
    for ch in id.chars() {
        if ch.is_alphanumeric() {
            if capitalize {
                result.extend(ch.to_uppercase());
                capitalize = false;
            } else {
                result.push(ch);
            }
        } else {
            capitalize = true;
        }
    }
    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}
