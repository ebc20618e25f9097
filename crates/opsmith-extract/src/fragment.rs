/// One sentence-like piece of a requirement, pre-tokenized for the rules.
///
/// Tokens are maximal runs of `[A-Za-z0-9_/.-]` taken from the lower-cased
/// text, so package names, service names and paths survive as single tokens
/// while punctuation splits them. Matching against tokens (rather than raw
/// substrings) keeps `restart` from also matching `start`.
#[derive(Debug)]
pub struct Fragment {
    /// Trimmed source text, original casing kept for `original_text`.
    original: String,
    lower: String,
    tokens: Vec<Token>,
}

#[derive(Debug)]
struct Token {
    text: String,
    /// Byte offset in `lower` just past the token.
    end: usize,
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '.' | '-')
}

impl Fragment {
    pub fn new(text: &str) -> Self {
        let original = text.trim().to_string();
        let lower = original.to_lowercase();

        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut end = 0;
        for (idx, c) in lower.char_indices() {
            if is_token_char(c) {
                current.push(c);
                end = idx + c.len_utf8();
            } else if !current.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut current),
                    end,
                });
            }
        }
        if !current.is_empty() {
            tokens.push(Token { text: current, end });
        }

        Self {
            original,
            lower,
            tokens,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.text.as_str())
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.tokens.iter().any(|t| t.text == word)
    }

    /// Index of the first token equal to any of `words`.
    pub fn find_word(&self, words: &[&str]) -> Option<usize> {
        self.tokens
            .iter()
            .position(|t| words.contains(&t.text.as_str()))
    }

    /// The lower-cased text following the token at `index`.
    pub fn tail_after(&self, index: usize) -> &str {
        match self.tokens.get(index) {
            Some(token) => self.lower[token.end..].trim_start(),
            None => "",
        }
    }
}
