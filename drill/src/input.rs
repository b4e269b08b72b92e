use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use anyhow::Context;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input ended before {what}")]
    Missing { what: &'static str },
    #[error("expected an integer for {what}, found `{token}`")]
    InvalidInteger { what: &'static str, token: String },
    #[error("{what} must not be negative, found {value}")]
    NegativeCount { what: &'static str, value: i64 },
}

pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Whitespace-separated integer tokens.
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    pub fn next_i64(&mut self, what: &'static str) -> Result<i64, InputError> {
        let token = self.inner.next().ok_or(InputError::Missing { what })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            what,
            token: token.to_string(),
        })
    }

    pub fn next_count(&mut self, what: &'static str) -> Result<usize, InputError> {
        let value = self.next_i64(what)?;
        usize::try_from(value).map_err(|_| InputError::NegativeCount { what, value })
    }

    pub fn take_i64s(&mut self, n: usize, what: &'static str) -> Result<Vec<i64>, InputError> {
        (0..n).map(|_| self.next_i64(what)).collect()
    }

    /// Log and drop whatever is left.
    pub fn finish(mut self) {
        let extra = self.inner.by_ref().count();
        if extra > 0 {
            tracing::warn!(extra, "ignoring trailing input tokens");
        }
    }
}
