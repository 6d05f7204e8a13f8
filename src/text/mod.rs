//! String helpers.

/// Returns a copy of the string with its first character uppercased.
///
/// Only the leading character is transformed; the rest of the string is
/// carried over unchanged, so the result is idempotent. The uppercase
/// mapping is the character's full Unicode mapping, which may expand to
/// more than one character (`"ß"` becomes `"SS"`). Empty input returns an
/// empty string rather than panicking on the missing first character.
///
/// # Examples
///
/// ```
/// use lull::text::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("Hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_the_first_character() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn idempotent_on_capitalized_input() {
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize(&capitalize("hello")), "Hello");
    }

    #[test]
    fn leaves_the_tail_untouched() {
        assert_eq!(capitalize("hELLo wOrLd"), "HELLo wOrLd");
        assert_eq!(&capitalize("hELLo wOrLd")[1..], &"hELLo wOrLd"[1..]);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn non_alphabetic_first_character_is_unchanged() {
        assert_eq!(capitalize("123abc"), "123abc");
        assert_eq!(capitalize(" hello"), " hello");
    }

    #[test]
    fn multibyte_first_character() {
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize("ßeta"), "SSeta");
    }
}
