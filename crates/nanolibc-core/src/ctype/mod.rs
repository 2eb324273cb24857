//! Character classification.
//!
//! Implements the `<ctype.h>` predicates the primitive surface needs,
//! classifying individual bytes. C locale only.
//!
//! Predicates are explicit range checks, never a table indexed by the raw
//! argument, so a negative or out-of-range value handed to the ABI layer
//! can never turn into an out-of-bounds load.

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is a whitespace character.
///
/// Whitespace: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digit() {
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit(b'a'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(b' '));
        assert!(is_space(b'\t'));
        assert!(is_space(b'\n'));
        assert!(is_space(0x0B));
        assert!(is_space(0x0C));
        assert!(is_space(b'\r'));
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
    }

    #[test]
    fn exhaustive_membership() {
        // The two predicates are defined by exact byte sets.
        for c in 0u8..=255 {
            assert_eq!(is_digit(c), (48..=57).contains(&c), "digit set failed for {c}");
            assert_eq!(
                is_space(c),
                [9u8, 10, 11, 12, 13, 32].contains(&c),
                "space set failed for {c}"
            );
            assert!(!(is_digit(c) && is_space(c)), "sets must be disjoint for {c}");
        }
    }
}
