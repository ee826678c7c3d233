//! Morse-style letter codes
//!
//! A code is a short, non-empty run of dots and dashes. Codes parse from
//! strings such as `"-.-."` and know their weighted length in dits.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::IconError;

/// Codes drawn when no configuration overrides them
pub const DEFAULT_CODES: &[&str] = &["-.-", "--...", "--..", "..-.", "-.-."];

/// A single Morse symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Dot, one dit long
    Short,
    /// Dash, three dits long
    Long,
}

impl Symbol {
    /// Length of the symbol in dits
    pub fn weight(self) -> usize {
        match self {
            Symbol::Short => 1,
            Symbol::Long => 3,
        }
    }

    fn as_char(self) -> char {
        match self {
            Symbol::Short => '.',
            Symbol::Long => '-',
        }
    }
}

/// An ordered, non-empty sequence of symbols representing one letter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Code {
    symbols: Vec<Symbol>,
}

impl Code {
    /// Build a code from symbols. Returns `None` for an empty sequence.
    pub fn new(symbols: Vec<Symbol>) -> Option<Self> {
        if symbols.is_empty() {
            None
        } else {
            Some(Self { symbols })
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; codes are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Sum of symbol weights plus one dit of gap between adjacent symbols
    pub fn weighted_length(&self) -> usize {
        let marks: usize = self.symbols.iter().map(|s| s.weight()).sum();
        marks + self.symbols.len() - 1
    }
}

impl FromStr for Code {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(|c| match c {
                '.' => Ok(Symbol::Short),
                '-' => Ok(Symbol::Long),
                other => Err(IconError::InvalidCode {
                    code: s.to_string(),
                    reason: format!("unexpected character '{}'", other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Code::new(symbols).ok_or_else(|| IconError::InvalidCode {
            code: s.to_string(),
            reason: "code is empty".to_string(),
        })
    }
}

impl TryFrom<String> for Code {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

/// Parse the built-in code set
pub fn default_codes() -> Vec<Code> {
    DEFAULT_CODES
        .iter()
        .map(|s| Code {
            symbols: s
                .chars()
                .map(|c| if c == '.' { Symbol::Short } else { Symbol::Long })
                .collect(),
        })
        .collect()
}
