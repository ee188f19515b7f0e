//! Base-92 digit to printable character mapping.
//!
//! The alphabet is every printable ASCII character from `!` (33) to `~`
//! (126) except `"` (34) and `\` (92), so encoded output can be embedded
//! in a double-quoted string literal without escaping.

pub(crate) fn digit_to_char(digit: u8) -> char {
    let mut code = digit + 33;
    if code >= 34 {
        code += 1;
    }
    if code >= 92 {
        code += 1;
    }
    code as char
}

pub(crate) fn char_to_digit(c: char) -> Option<u8> {
    match u32::from(c) {
        33 => Some(0),
        code @ 35..=91 => Some((code - 34) as u8),
        code @ 93..=126 => Some((code - 35) as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_a_bijection_over_92_digits() {
        let mut seen = std::collections::HashSet::new();
        for digit in 0..92u8 {
            let c = digit_to_char(digit);
            assert!(seen.insert(c), "duplicate character {c:?}");
            assert!(c.is_ascii_graphic());
            assert_ne!(c, '"');
            assert_ne!(c, '\\');
            assert_eq!(char_to_digit(c), Some(digit));
        }
    }

    #[test]
    fn alphabet_spans_bang_to_tilde() {
        assert_eq!(digit_to_char(0), '!');
        assert_eq!(digit_to_char(91), '~');
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        for c in ['"', '\\', ' ', '\n', '\u{7f}', 'é', '\0'] {
            assert_eq!(char_to_digit(c), None);
        }
    }
}
