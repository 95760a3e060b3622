//! Token classification into the six reporting categories
//!
//! [`classify`] groups token values by [`Category`], keeping every
//! occurrence in input order. Tokens whose kind belongs to no category
//! (layout, unknown characters, bare special symbols) are ignored. Comment
//! tokens are expected to be filtered out by the caller beforehand; they
//! belong to no category either, so leaving them in changes nothing.
//!
//! [`summary`] derives the de-duplicated, counted breakdown shown in reports.

pub mod summary;

use crate::lexer::token::{Token, TokenKind};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keywords,
    Identifiers,
    Punctuations,
    Operators,
    Constants,
    Literals,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 6] = [
        Category::Keywords,
        Category::Identifiers,
        Category::Punctuations,
        Category::Operators,
        Category::Constants,
        Category::Literals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Keywords => "keywords",
            Category::Identifiers => "identifiers",
            Category::Punctuations => "punctuations",
            Category::Operators => "operators",
            Category::Constants => "constants",
            Category::Literals => "literals",
        }
    }

    /// The category a token kind reports under, if any.
    pub fn of(kind: TokenKind) -> Option<Category> {
        match kind {
            TokenKind::Keyword => Some(Category::Keywords),
            TokenKind::Identifier => Some(Category::Identifiers),
            TokenKind::Punctuator => Some(Category::Punctuations),
            TokenKind::Operator => Some(Category::Operators),
            TokenKind::IntConstant | TokenKind::FloatConstant => Some(Category::Constants),
            TokenKind::StringLiteral | TokenKind::CharLiteral => Some(Category::Literals),
            TokenKind::CommentSingle
            | TokenKind::CommentMulti
            | TokenKind::SpecialSymbol
            | TokenKind::Whitespace
            | TokenKind::Newline
            | TokenKind::Unknown => None,
        }
    }

    /// Storage slot in [`Classification`]. Discriminants follow the
    /// declaration order, which must match [`Category::ALL`].
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from each [`Category`] to its token values.
///
/// Values keep input order and duplicates; all six categories are always
/// present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    values: [Vec<String>; 6],
}

impl Classification {
    pub fn get(&self, category: Category) -> &[String] {
        &self.values[category.index()]
    }

    /// Categories with their values, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of classified values across all categories.
    pub fn len(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Vec::is_empty)
    }

    fn push(&mut self, category: Category, value: &str) {
        self.values[category.index()].push(value.to_string());
    }
}

impl Index<Category> for Classification {
    type Output = [String];

    fn index(&self, category: Category) -> &[String] {
        self.get(category)
    }
}

/// Group token values by category, in input order, duplicates retained.
pub fn classify<'t>(tokens: impl IntoIterator<Item = &'t Token>) -> Classification {
    let mut classification = Classification::default();
    for token in tokens {
        if let Some(category) = Category::of(token.kind) {
            classification.push(category, &token.value);
        }
    }
    classification
}
