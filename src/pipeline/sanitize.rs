/// Power operator understood by the parser.
pub const POWER_OPERATOR: &str = "**";

/// Glyphs from alternate keyboards or copy-paste, and their parser spelling.
const SYMBOL_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{00D7}', "*"), // multiplication sign
    ('\u{00F7}', "/"), // division sign
    ('\u{2212}', "-"), // minus sign
    ('^', POWER_OPERATOR),
];

/// Rewrites raw input into the syntax the parser accepts.
///
/// Whitespace is dropped and operator glyphs are replaced. The result never
/// contains whitespace or any replaced glyph, so sanitizing twice is the same
/// as sanitizing once.
pub fn sanitize(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        match SYMBOL_REPLACEMENTS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, replacement)) => sanitized.push_str(replacement),
            None => sanitized.push(c),
        }
    }
    sanitized
}
