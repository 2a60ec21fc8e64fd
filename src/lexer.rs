//! Splitting of an input line into argument tokens.
//!
//! Tokens are borrowed slices of the line they came from, so the line must
//! outlive every use of its tokens, including process creation. There is no
//! quoting, escaping or substitution: a delimiter always splits.

/// Characters separating two tokens.
pub const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

/// Splits `line` into tokens, left to right.
///
/// Runs of delimiters collapse, so no empty token is ever produced. A line made
/// only of delimiters (or an empty one) yields an empty vector.
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Joins tokens back into a line with single spaces between them.
pub fn join_tokens(tokens: &[&str]) -> String {
    tokens.join(" ")
}
