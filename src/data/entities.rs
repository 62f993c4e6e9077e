//! Decoding of the HTML character references the trivia API escapes.

/// Replacements in application order. `&amp;` goes last so that text such
/// as `&amp;lt;` decodes to `&lt;` instead of `<`.
const ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#039;", "'"),
    ("&amp;", "&"),
];

/// Replace the known HTML entities in a single string.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, literal) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, literal);
        }
    }
    decoded
}

/// Decode every string in `texts`, keeping order and length.
pub fn decode_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|text| decode_entities(text.as_ref())).collect()
}
