use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any character the parser has no use for.
    static ref DISALLOWED_CHAR: Regex = Regex::new(r"[^0-9+\-*/().^%,A-Za-z_]").unwrap();
}

/// Character whitelist applied to sanitized input.
///
/// Purely lexical: malformed but whitelisted input passes and is rejected by
/// the parser instead.
pub fn validate(expr: &str) -> Result<&str, CalcError> {
    let Some(found) = DISALLOWED_CHAR.find(expr) else {
        return Ok(expr);
    };

    let position = expr[..found.start()].chars().count();
    match found.as_str().chars().next() {
        Some(found) => Err(CalcError::InvalidCharacters { found, position }),
        None => Ok(expr),
    }
}
