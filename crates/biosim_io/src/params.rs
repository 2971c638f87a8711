//! Comment-aware tokenizer and the `key value` parameter file format shared
//! by `.sim`, species `.par` and cell `.par` files.

use crate::error::{IoError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Character that starts a comment. A comment runs to the end of its line.
pub const COMMENT_CHAR: char = '#';

/// A whitespace-separated token and the 1-based line it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

/// Splits `content` into tokens. A line whose first non-blank character is
/// `#` is skipped entirely.
pub fn tokenize(content: &str) -> Vec<Token> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_CHAR))
        .flat_map(|(i, line)| {
            line.split_whitespace().map(move |text| Token {
                text: text.to_string(),
                line: i + 1,
            })
        })
        .collect()
}

/// Cursor over the tokens of one file.
pub struct TokenStream<'a> {
    path: &'a Path,
    tokens: std::iter::Peekable<std::vec::IntoIter<Token>>,
    last_line: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(path: &'a Path, content: &str) -> Self {
        Self {
            path,
            tokens: tokenize(content).into_iter().peekable(),
            last_line: 1,
        }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    pub fn is_empty(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Line of the most recently consumed token.
    pub fn line(&self) -> usize {
        self.last_line
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.last_line = token.line;
        Some(token)
    }

    /// Drops a trailing comment at the cursor: a token starting with `#`
    /// together with every token after it on the same line.
    pub fn skip_comments(&mut self) {
        while let Some(line) = self
            .tokens
            .peek()
            .filter(|t| t.text.starts_with(COMMENT_CHAR))
            .map(|t| t.line)
        {
            while self.tokens.next_if(|t| t.line == line).is_some() {}
        }
    }

    /// The next token that can start a record, skipping comments.
    pub fn next_key(&mut self) -> Option<Token> {
        self.skip_comments();
        self.next_token()
    }

    /// The next token, or a parse error describing what was `expected`.
    pub fn expect(&mut self, expected: &str) -> Result<Token> {
        self.next_token().ok_or_else(|| {
            IoError::parse(
                self.path,
                self.last_line,
                format!("unexpected end of file, expected {expected}"),
            )
        })
    }

    /// The next token parsed as `T`.
    pub fn expect_value<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.expect(expected)?;
        parse_token(self.path, &token, expected)
    }
}

pub fn parse_token<T: FromStr>(path: &Path, token: &Token, expected: &str) -> Result<T> {
    token.text.parse().map_err(|_| {
        IoError::parse(
            path,
            token.line,
            format!("expected {expected}, found '{}'", token.text),
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Token,
}

/// A parsed `key value` file. Keys are checked against an allow list on
/// construction; for non-list keys the last occurrence wins.
#[derive(Debug, Clone)]
pub struct ParamFile {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl ParamFile {
    pub fn read(path: &Path, known_keys: &[&str]) -> Result<Self> {
        let content = crate::error::read_to_string(path)?;
        Self::parse(path, &content, known_keys)
    }

    pub fn parse(path: &Path, content: &str, known_keys: &[&str]) -> Result<Self> {
        let mut stream = TokenStream::new(path, content);
        let mut entries = Vec::new();
        while let Some(key) = stream.next_key() {
            if !known_keys.contains(&key.text.as_str()) {
                return Err(IoError::unknown(path, key.text));
            }
            let value = stream.expect(&format!("a value for '{}'", key.text))?;
            entries.push(Entry {
                key: key.text,
                value,
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn last(&self, key: &str) -> Option<&Token> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Last value given for `key`, as text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.last(key).map(|t| t.text.as_str())
    }

    /// Every value given for a list key, in file order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.key == key)
            .map(|e| e.value.text.as_str())
            .collect()
    }

    /// Last value given for `key`, parsed as `T`.
    pub fn value<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.last(key)
            .map(|token| parse_token(&self.path, token, &format!("a value for '{key}'")))
            .transpose()
    }

    pub fn require<T: FromStr>(&self, key: &str) -> Result<T> {
        self.value(key)?
            .ok_or_else(|| IoError::missing(&self.path, key))
    }
}
