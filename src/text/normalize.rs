/// Punctuation preserved by the character filter
const ALLOWED_PUNCTUATION: &str = ".,:;?!'\"-";

/// Normalize raw recognition output
///
/// Collapses whitespace runs to single spaces, applies fixed substitutions
/// for common recognition confusions, strips characters outside the allowed
/// set, and trims. The substitutions are applied blindly with no
/// surrounding-context check, so legitimate digits are affected too; that
/// tradeoff is accepted for handwriting input.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        // Common recognition confusions: bar for I, zero for O
        let ch = match ch {
            '|' => 'I',
            '0' => 'O',
            other => other,
        };

        if is_allowed(ch) {
            out.push(ch);
        }
    }

    out.trim().to_string()
}

fn is_allowed(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch.is_whitespace() || ALLOWED_PUNCTUATION.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a   b\t\nc"), "a b c");
    }

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(normalize("  hello  "), "hello");
    }

    #[test]
    fn test_normalize_substitutes_bar_and_zero() {
        assert_eq!(normalize("a|0b"), "aIOb");
        assert_eq!(normalize("|0"), "IO");
    }

    #[test]
    fn test_normalize_substitution_is_blind() {
        // Numeric input gets rewritten too; accepted tradeoff
        assert_eq!(normalize("100"), "1OO");
    }

    #[test]
    fn test_normalize_strips_disallowed_characters() {
        assert_eq!(normalize("a#b$c"), "abc");
        assert_eq!(normalize("a*b@c"), "abc");
    }

    #[test]
    fn test_normalize_keeps_allowed_punctuation() {
        assert_eq!(normalize("a, b!"), "a, b!");
        assert_eq!(normalize("it's a test: yes; no? \"q\" - end."), "it's a test: yes; no? \"q\" - end.");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent_without_confusable_chars() {
        let text = "a b c, d!";
        assert_eq!(normalize(&normalize(text)), normalize(text));
    }
}
