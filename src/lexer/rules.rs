//! Rule registry: the ordered lexical rules and the reserved-word set.
//!
//! Each rule pairs a [`TokenKind`] with a hand-written anchored matcher that
//! reports how many bytes it accepts at the start of the remaining input.
//! Matchers are plain bounded loops over the input, so no rule ever
//! backtracks. The order of [`RULES`] is the tie-break table: the scanner
//! takes the first rule that matches, not the longest.

use super::token::TokenKind;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::OnceLock;

/// C99 reserved words. Identifiers spelled exactly like one of these are
/// emitted as [`TokenKind::Keyword`].
pub const KEYWORDS: [&str; 34] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Punctuator characters. A special symbol spelled like one of these is
/// emitted as [`TokenKind::Punctuator`].
pub const PUNCTUATORS: [char; 11] = ['(', ')', '{', '}', '[', ']', ';', ',', '.', ':', '#'];

/// Two-character operators, tried before any single-character operator.
pub const MULTI_CHAR_OPERATORS: [&str; 15] = [
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=",
];

pub const SINGLE_CHAR_OPERATORS: [char; 13] =
    ['+', '-', '*', '/', '%', '=', '<', '>', '&', '|', '^', '~', '!'];

/// Bare quote and backslash characters left over when a literal rule fails.
pub const SPECIAL_SYMBOLS: [char; 3] = ['"', '\'', '\\'];

/// Non-ASCII letters accepted in identifiers.
const ACCENTED_LETTERS: [char; 14] = [
    'á', 'é', 'í', 'ó', 'ú', 'Á', 'É', 'Í', 'Ó', 'Ú', 'ñ', 'Ñ', 'ü', 'Ü',
];

/// One entry of the registry: a token kind and its anchored matcher.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: TokenKind,
    matcher: fn(&str) -> Option<usize>,
}

impl Rule {
    const fn new(kind: TokenKind, matcher: fn(&str) -> Option<usize>) -> Self {
        Self { kind, matcher }
    }

    /// Length in bytes of the match at the start of `rest`, if any.
    /// A rule never reports an empty match.
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        (self.matcher)(rest).filter(|&len| len > 0)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// The rule table in priority order.
///
/// Literals precede everything so quotes are consumed whole when they can be;
/// `FloatConstant` precedes `IntConstant` so `3.14` is one token; comments
/// precede operators so `//` and `/*` are not split into `/` tokens.
pub static RULES: [Rule; 12] = [
    Rule::new(TokenKind::StringLiteral, string_literal),
    Rule::new(TokenKind::CharLiteral, char_literal),
    Rule::new(TokenKind::FloatConstant, float_constant),
    Rule::new(TokenKind::IntConstant, int_constant),
    Rule::new(TokenKind::Identifier, identifier),
    Rule::new(TokenKind::CommentSingle, comment_single),
    Rule::new(TokenKind::CommentMulti, comment_multi),
    Rule::new(TokenKind::Operator, operator),
    Rule::new(TokenKind::Punctuator, punctuator),
    Rule::new(TokenKind::SpecialSymbol, special_symbol),
    Rule::new(TokenKind::Whitespace, whitespace),
    Rule::new(TokenKind::Newline, newline),
];

static RESERVED_WORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();

/// The reserved-word set, built on first use and shared read-only afterwards.
pub fn reserved_words() -> &'static FxHashSet<&'static str> {
    RESERVED_WORDS.get_or_init(|| KEYWORDS.iter().copied().collect())
}

pub fn is_reserved_word(word: &str) -> bool {
    reserved_words().contains(word)
}

/// True when `value` is exactly one punctuator character.
pub fn is_punctuator(value: &str) -> bool {
    let mut chars = value.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if PUNCTUATORS.contains(&c))
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || ACCENTED_LETTERS.contains(&c)
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// First code point of every run of ten decimal digits (general category
/// `Nd`). Each run covers `zero..zero + 10`.
const DECIMAL_DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Decimal digit in any script: `٣` counts, `½` and `Ⅻ` do not.
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let code = u32::from(c);
    c.is_numeric()
        && DECIMAL_DIGIT_ZEROS
            .iter()
            .any(|&zero| (zero..zero + 10).contains(&code))
}

/// Byte length of the leading run of decimal digits.
fn digit_run(rest: &str) -> usize {
    rest.chars()
        .take_while(|&c| is_decimal_digit(c))
        .map(char::len_utf8)
        .sum()
}

/// Length of a leading single-character match from `set`.
fn single_from(rest: &str, set: &[char]) -> Option<usize> {
    rest.chars()
        .next()
        .filter(|c| set.contains(c))
        .map(char::len_utf8)
}

// "..." with backslash escapes; a raw newline ends the attempt.
fn string_literal(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if chars.next()?.1 != '"' {
        return None;
    }
    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return Some(i + 1),
            '\\' => match chars.next() {
                Some((_, '\n')) | None => return None,
                Some(_) => {}
            },
            '\n' => return None,
            _ => {}
        }
    }
    None
}

// 'c' or '\c'
fn char_literal(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if chars.next()?.1 != '\'' {
        return None;
    }
    match chars.next()?.1 {
        '\'' => return None,
        '\\' => {
            if chars.next()?.1 == '\n' {
                return None;
            }
        }
        _ => {}
    }
    let (i, close) = chars.next()?;
    (close == '\'').then_some(i + 1)
}

// digits '.' digits? ([eE] [+-]? digits)?
fn float_constant(rest: &str) -> Option<usize> {
    let whole = digit_run(rest);
    if whole == 0 || rest.as_bytes().get(whole) != Some(&b'.') {
        return None;
    }
    let mut end = whole + 1;
    end += digit_run(&rest[end..]);
    Some(end + exponent(&rest[end..]))
}

/// Length of a complete exponent suffix, or 0 when there is none.
fn exponent(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    match digit_run(&rest[1 + sign..]) {
        0 => 0,
        digits => 1 + sign + digits,
    }
}

fn int_constant(rest: &str) -> Option<usize> {
    Some(digit_run(rest))
}

fn identifier(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }
    Some(
        chars
            .find(|&(_, c)| !is_ident_continue(c))
            .map_or(rest.len(), |(i, _)| i),
    )
}

fn comment_single(rest: &str) -> Option<usize> {
    rest.starts_with("//")
        .then(|| rest.find('\n').unwrap_or(rest.len()))
}

// Lazy: stops at the first "*/" after the opener, across newlines.
fn comment_multi(rest: &str) -> Option<usize> {
    rest.strip_prefix("/*")?.find("*/").map(|i| i + 4)
}

fn operator(rest: &str) -> Option<usize> {
    if MULTI_CHAR_OPERATORS.iter().any(|op| rest.starts_with(op)) {
        return Some(2);
    }
    single_from(rest, &SINGLE_CHAR_OPERATORS)
}

fn punctuator(rest: &str) -> Option<usize> {
    single_from(rest, &PUNCTUATORS)
}

fn special_symbol(rest: &str) -> Option<usize> {
    single_from(rest, &SPECIAL_SYMBOLS)
}

fn whitespace(rest: &str) -> Option<usize> {
    Some(
        rest.bytes()
            .take_while(|b| matches!(b, b' ' | b'\t'))
            .count(),
    )
}

fn newline(rest: &str) -> Option<usize> {
    rest.starts_with('\n').then_some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: TokenKind) -> Rule {
        RULES
            .iter()
            .copied()
            .find(|r| r.kind == kind)
            .expect("every rule kind is registered")
    }

    #[test]
    fn test_rule_order() {
        let kinds: Vec<TokenKind> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::StringLiteral,
                TokenKind::CharLiteral,
                TokenKind::FloatConstant,
                TokenKind::IntConstant,
                TokenKind::Identifier,
                TokenKind::CommentSingle,
                TokenKind::CommentMulti,
                TokenKind::Operator,
                TokenKind::Punctuator,
                TokenKind::SpecialSymbol,
                TokenKind::Whitespace,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_string_literal() {
        let r = rule(TokenKind::StringLiteral);
        assert_eq!(r.match_at(r#""hello" rest"#), Some(7));
        assert_eq!(r.match_at(r#""a\"b""#), Some(6));
        assert_eq!(r.match_at(r#""""#), Some(2));
        assert_eq!(r.match_at("\"open"), None);
        assert_eq!(r.match_at("\"line\nbreak\""), None);
        assert_eq!(r.match_at("\"ñandú\""), Some("\"ñandú\"".len()));
    }

    #[test]
    fn test_char_literal() {
        let r = rule(TokenKind::CharLiteral);
        assert_eq!(r.match_at("'a'"), Some(3));
        assert_eq!(r.match_at(r"'\n'"), Some(4));
        assert_eq!(r.match_at(r"'\''"), Some(4));
        assert_eq!(r.match_at("''"), None);
        assert_eq!(r.match_at("'ab'"), None);
        assert_eq!(r.match_at("'a"), None);
    }

    #[test]
    fn test_float_constant() {
        let r = rule(TokenKind::FloatConstant);
        assert_eq!(r.match_at("3.14;"), Some(4));
        assert_eq!(r.match_at("3."), Some(2));
        assert_eq!(r.match_at("1.5e10"), Some(6));
        assert_eq!(r.match_at("1.5E-3x"), Some(6));
        // Incomplete exponent is left for the identifier rule.
        assert_eq!(r.match_at("2.0e+"), Some(3));
        assert_eq!(r.match_at("42"), None);
        assert_eq!(r.match_at(".5"), None);
    }

    #[test]
    fn test_constants_accept_any_decimal_script() {
        let int = rule(TokenKind::IntConstant);
        let float = rule(TokenKind::FloatConstant);
        assert_eq!(int.match_at("\u{0663}\u{0664};"), Some(4));
        assert_eq!(float.match_at("\u{0663}.5"), Some(4));
        assert_eq!(float.match_at("1.\u{0966}e\u{0967}"), Some(9));
        // Numeric but not decimal digits.
        assert_eq!(int.match_at("\u{00BD}"), None);
        assert_eq!(int.match_at("\u{216B}"), None);
        assert_eq!(int.match_at("\u{00B2}"), None);
    }

    #[test]
    fn test_identifier() {
        let r = rule(TokenKind::Identifier);
        assert_eq!(r.match_at("_count1 = 2"), Some(7));
        assert_eq!(r.match_at("niño"), Some("niño".len()));
        assert_eq!(r.match_at("Ünter x"), Some("Ünter".len()));
        assert_eq!(r.match_at("9lives"), None);
        // Only ASCII digits continue an identifier.
        assert_eq!(r.match_at("x\u{0663}"), Some(1));
        assert_eq!(r.match_at("ß"), None);
    }

    #[test]
    fn test_comments() {
        let single = rule(TokenKind::CommentSingle);
        assert_eq!(single.match_at("// note\nx"), Some(7));
        assert_eq!(single.match_at("//"), Some(2));

        let multi = rule(TokenKind::CommentMulti);
        assert_eq!(multi.match_at("/* a\nb */ x"), Some(9));
        assert_eq!(multi.match_at("/* a */ b */"), Some(7));
        assert_eq!(multi.match_at("/*/"), None);
        assert_eq!(multi.match_at("/* open"), None);
    }

    #[test]
    fn test_operator_prefers_two_characters() {
        let r = rule(TokenKind::Operator);
        for op in MULTI_CHAR_OPERATORS {
            assert_eq!(r.match_at(op), Some(2), "operator {op}");
        }
        assert_eq!(r.match_at("=a"), Some(1));
        assert_eq!(r.match_at("!x"), Some(1));
        assert_eq!(r.match_at("?"), None);
    }

    #[test]
    fn test_layout_rules() {
        assert_eq!(rule(TokenKind::Whitespace).match_at(" \t x"), Some(3));
        assert_eq!(rule(TokenKind::Whitespace).match_at("x"), None);
        assert_eq!(rule(TokenKind::Newline).match_at("\n\n"), Some(1));
        assert_eq!(rule(TokenKind::Newline).match_at("\r\n"), None);
    }

    #[test]
    fn test_reserved_words_are_exact() {
        assert!(is_reserved_word("int"));
        assert!(is_reserved_word("volatile"));
        assert!(!is_reserved_word("integer"));
        assert!(!is_reserved_word("Int"));
        assert_eq!(reserved_words().len(), KEYWORDS.len());
    }

    #[test]
    fn test_is_punctuator() {
        assert!(is_punctuator("#"));
        assert!(!is_punctuator("\""));
        assert!(!is_punctuator("()"));
        assert!(!is_punctuator(""));
    }
}
