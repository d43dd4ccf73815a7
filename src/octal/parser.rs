//! Text grammars for the explicit octal literal (`0o644`) and signed decimal (`-438`, `+0007`)
//! forms. Both only recognize the shape of the text, range and length checks are left to the
//! callers so they can report the right error.
//!
//! Surrounding whitespace is ignored and single underscores may separate digit groups, so
//! `" 4_38 "` reads as `438`.

use winnow::ascii::{digit1, oct_digit1};
use winnow::combinator::{opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::token::one_of;
use winnow::Parser;

pub(crate) type ParserResult<O> = Result<O, ErrMode<ContextError>>;

pub(crate) const OCTAL_LITERAL_PREFIX: &str = "0o";

const DIGIT_SEPARATOR: char = '_';

/// Matches `0o` followed by one or more octal digits, producing only the digits (separators
/// included).
pub(crate) fn octal_literal<'i>(input: &mut &'i str) -> ParserResult<&'i str> {
    preceded(
        OCTAL_LITERAL_PREFIX,
        (
            oct_digit1,
            repeat(0.., preceded(DIGIT_SEPARATOR, oct_digit1)).map(|()| ()),
        )
            .take(),
    )
    .parse_next(input)
}

/// Matches an optionally signed run of decimal digits, producing the full matched text.
pub(crate) fn signed_decimal<'i>(input: &mut &'i str) -> ParserResult<&'i str> {
    (
        opt(one_of(['+', '-'])),
        digit1,
        repeat(0.., preceded(DIGIT_SEPARATOR, digit1)).map(|()| ()),
    )
        .take()
        .parse_next(input)
}

fn without_separators(digits: &str) -> String {
    digits.chars().filter(|c| *c != DIGIT_SEPARATOR).collect()
}

/// Parses the entirety of `text` as an octal literal, returning its digits.
pub(crate) fn parse_octal_literal(text: &str) -> Option<String> {
    octal_literal
        .parse(text.trim())
        .ok()
        .map(without_separators)
}

/// Parses the entirety of `text` as a signed decimal number. `None` means the text is not
/// shaped like a number; `Some(None)` means it is, but it doesn't fit in an `i64`.
pub(crate) fn parse_signed_decimal(text: &str) -> Option<Option<i64>> {
    let matched = signed_decimal.parse(text.trim()).ok()?;
    Some(without_separators(matched).parse::<i64>().ok())
}
