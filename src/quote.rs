//! Quote handling for pre-cells: parity of quote runs and unwrapping of quoted cells

/// The only quote character understood by the parser
pub const QUOTE: char = '"';

const DOUBLED_QUOTE: &str = "\"\"";

/// Check whether `s` starts with an odd-length run of quote characters
///
/// An odd leading run means the cell opens a quoted span. An even run is a
/// sequence of escaped quotes and does not open anything
pub fn odd_quotes_from_start(s: &str) -> bool {
    s.chars().take_while(|&c| c == QUOTE).count() % 2 == 1
}

/// Check whether `s` ends with an odd-length run of quote characters
///
/// An odd trailing run closes a quoted span that is currently open
pub fn odd_quotes_from_end(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == QUOTE).count() % 2 == 1
}

/// Remove the wrapping quotes of a cell and collapse doubled quotes
///
/// The first and last characters are dropped unconditionally, so this must run
/// exactly once per quoted cell. Empty input is returned as is
///
/// # Examples
/// ```
/// use lib_csv_table::quote::unquote;
///
/// assert_eq!(unquote(r#""say ""hi""""#), r#"say "hi""#);
/// ```
pub fn unquote(cell: &str) -> String {
    let mut chars = cell.chars();
    chars.next();
    chars.next_back();
    chars.as_str().replace(DOUBLED_QUOTE, "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_from_start() {
        assert!(odd_quotes_from_start("\"abc"));
        assert!(odd_quotes_from_start("\"\"\"abc"));
        assert!(odd_quotes_from_start("\""));
        assert!(!odd_quotes_from_start("\"\"abc"));
        assert!(!odd_quotes_from_start("abc\""));
        assert!(!odd_quotes_from_start(""));
    }

    #[test]
    fn test_odd_from_end() {
        assert!(odd_quotes_from_end("abc\""));
        assert!(odd_quotes_from_end("a\"\"\""));
        assert!(!odd_quotes_from_end("abc\"\""));
        assert!(!odd_quotes_from_end("\"abc"));
        assert!(!odd_quotes_from_end(""));
    }

    #[test]
    fn test_runs_stop_at_first_other_char() {
        // Only the run touching the edge counts, not quotes further inside
        assert!(odd_quotes_from_start("\"a\"\"b"));
        assert!(!odd_quotes_from_end("a\"b\"\""));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\"ab\"\"cd\""), "ab\"cd");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\"\"\"\"\"\""), "\"\"");
        assert_eq!(unquote(""), "");
    }

    #[test]
    fn test_unquote_multibyte_edges() {
        assert_eq!(unquote("\"héllo wörld\""), "héllo wörld");
        assert_eq!(unquote("é"), "");
    }

    #[test]
    fn test_unquote_is_not_idempotent() {
        let once = unquote("\"a\"\"\"\"b\"");
        assert_eq!(once, "a\"\"b");
        assert_ne!(unquote(&once), once);
    }
}
