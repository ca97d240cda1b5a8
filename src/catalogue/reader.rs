//! Line cursor over the catalogue text.
//!
//! The format is positional: each read consumes exactly one physical line,
//! blank or not, and every error names the line, the record being read and
//! the field that failed.

use std::str::FromStr;

use crate::error::SymmetryError;
use crate::Result;

pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
    record: String,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
            record: "header".to_string(),
        }
    }

    /// Name used in error messages for everything read from here on.
    pub fn set_record(&mut self, record: impl Into<String>) {
        self.record = record.into();
    }

    /// 1-based number of the next line to be read.
    pub fn line_number(&self) -> usize {
        self.position + 1
    }

    /// Consume the next physical line and split it into tokens.
    pub fn next_row(&mut self, field: &str) -> Result<Row> {
        let line = self.position + 1;
        let text = self.lines.get(self.position).copied().ok_or_else(|| SymmetryError::Parse {
            line,
            record: self.record.clone(),
            field: field.to_string(),
            message: "unexpected end of data".to_string(),
        })?;
        self.position += 1;
        Ok(Row {
            line,
            record: self.record.clone(),
            tokens: tokenize(text),
            next: 0,
        })
    }

    /// Lines left that carry any content.
    pub fn remaining_non_blank(&self) -> usize {
        self.lines[self.position.min(self.lines.len())..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count()
    }
}

/// Tokens of one physical line, consumed left to right.
#[derive(Debug)]
pub struct Row {
    line: usize,
    record: String,
    tokens: Vec<String>,
    next: usize,
}

impl Row {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.tokens.len()
    }

    pub fn error(&self, field: &str, message: impl Into<String>) -> SymmetryError {
        SymmetryError::Parse {
            line: self.line,
            record: self.record.clone(),
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn text(&mut self, field: &str) -> Result<String> {
        let token = self
            .tokens
            .get(self.next)
            .cloned()
            .ok_or_else(|| self.error(field, "missing value"))?;
        self.next += 1;
        Ok(token)
    }

    pub fn int<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self.text(field)?;
        token
            .parse()
            .map_err(|_| self.error(field, format!("cannot read `{}` as an integer", token)))
    }

    pub fn ints<const N: usize>(&mut self, field: &str) -> Result<[i64; N]> {
        let mut values = [0i64; N];
        for value in values.iter_mut() {
            *value = self.int(field)?;
        }
        Ok(values)
    }
}

/// Whitespace-separated tokens; double quotes group a token and are stripped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}
