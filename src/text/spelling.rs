use thiserror::Error;

/// Outcome of a dictionary lookup
#[derive(Debug, Clone)]
pub struct Lookup {
    /// Whether the word is spelled correctly
    pub known: bool,
    /// Replacement for an unknown word, if the dictionary has one
    pub suggestion: Option<String>,
}

#[derive(Error, Debug)]
#[error("dictionary lookup failed: {0}")]
pub struct DictionaryError(pub String);

/// Lexical-correction capability behind the spelling pass
///
/// Implementations may be backed by a real word list; the default
/// [`AcceptAll`] treats every word as correct, which keeps the correction
/// pass a no-op until a real dictionary is wired in.
pub trait Dictionary: Send + Sync {
    fn lookup(&self, word: &str) -> Result<Lookup, DictionaryError>;
}

/// Default dictionary that reports every word as known
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn lookup(&self, _word: &str) -> Result<Lookup, DictionaryError> {
        Ok(Lookup {
            known: true,
            suggestion: None,
        })
    }
}

/// Correct spelling token by token
///
/// Tokens that are entirely punctuation or at most two characters pass
/// through unchanged (too short or ambiguous to correct safely). Dictionary
/// failures are logged and leave the text unchanged rather than propagating.
pub fn correct_spelling(text: &str, dictionary: &dyn Dictionary) -> String {
    if text.is_empty() {
        return String::new();
    }

    match correct_tokens(text, dictionary) {
        Ok(corrected) => corrected,
        Err(e) => {
            tracing::error!("Spelling correction failed, keeping text unchanged: {}", e);
            text.to_string()
        }
    }
}

fn correct_tokens(text: &str, dictionary: &dyn Dictionary) -> Result<String, DictionaryError> {
    let mut corrected = Vec::new();

    for token in text.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_punctuation()) || token.chars().count() <= 2 {
            corrected.push(token.to_string());
            continue;
        }

        let (prefix, core, suffix) = split_token(token);
        if core.is_empty() {
            corrected.push(token.to_string());
            continue;
        }

        let lookup = dictionary.lookup(&core.to_lowercase())?;
        if lookup.known {
            corrected.push(token.to_string());
        } else if let Some(suggestion) = lookup.suggestion {
            corrected.push(format!("{}{}{}", prefix, suggestion, suffix));
        } else {
            corrected.push(token.to_string());
        }
    }

    Ok(corrected.join(" "))
}

/// Split a token into leading non-word characters, a word-only core, and
/// the trailing non-word run directly after the core
fn split_token(token: &str) -> (&str, &str, &str) {
    let start = token.find(is_word_char).unwrap_or(token.len());
    let (prefix, rest) = token.split_at(start);

    let core_end = rest.find(|c| !is_word_char(c)).unwrap_or(rest.len());
    let (core, tail) = rest.split_at(core_end);

    let suffix_end = tail.find(is_word_char).unwrap_or(tail.len());
    (prefix, core, &tail[..suffix_end])
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
