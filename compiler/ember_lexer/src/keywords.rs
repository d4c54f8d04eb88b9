//! Keyword tables.
//!
//! A [`Dialect`] is a lexical profile: the same grammar with a different set
//! of keyword spellings. Matching is ASCII case-insensitive, so `LET`, `Let`
//! and `let` all declare a variable in the standard dialect.

use std::fmt;
use std::str::FromStr;

use ember_ir::TokenKind;

/// Keyword spelling in effect while lexing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Dialect {
    /// `let const fn if else while import`
    #[default]
    Standard,
    /// `set fix define when otherwise during use`
    Prose,
}

/// How a run of letters is classified under a dialect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Word {
    Keyword(TokenKind),
    Switch(Dialect),
    Identifier,
}

const STANDARD: &[(&str, TokenKind)] = &[
    ("let", TokenKind::Let),
    ("const", TokenKind::Const),
    ("fn", TokenKind::Fn),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("import", TokenKind::Import),
];

const PROSE: &[(&str, TokenKind)] = &[
    ("set", TokenKind::Let),
    ("fix", TokenKind::Const),
    ("define", TokenKind::Fn),
    ("when", TokenKind::If),
    ("otherwise", TokenKind::Else),
    ("during", TokenKind::While),
    ("use", TokenKind::Import),
];

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Standard, Dialect::Prose];

    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Prose => "prose",
        }
    }

    /// Spelling to kind pairs recognised as keywords.
    pub const fn keywords(self) -> &'static [(&'static str, TokenKind)] {
        match self {
            Dialect::Standard => STANDARD,
            Dialect::Prose => PROSE,
        }
    }

    /// The word that switches away from this dialect, and where it leads.
    pub const fn switch(self) -> (&'static str, Dialect) {
        match self {
            Dialect::Standard => ("prose", Dialect::Prose),
            Dialect::Prose => ("standard", Dialect::Standard),
        }
    }

    pub(crate) fn classify(self, word: &str) -> Word {
        let (switch_word, target) = self.switch();
        if word.eq_ignore_ascii_case(switch_word) {
            return Word::Switch(target);
        }
        self.keywords()
            .iter()
            .find(|(spelling, _)| word.eq_ignore_ascii_case(spelling))
            .map_or(Word::Identifier, |&(_, kind)| Word::Keyword(kind))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a dialect name fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown dialect `{0}` (expected `standard` or `prose`)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.name()))
            .ok_or_else(|| UnknownDialect(s.to_owned()))
    }
}

#[cfg(test)]
mod tests;
