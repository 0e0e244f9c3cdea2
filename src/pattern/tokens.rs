use winnow::combinator::{preceded, repeat};
use winnow::token::{none_of, one_of};
use winnow::{ModalResult, Parser};

// Affix text runs up to the next layout character. `%`, `‰` and sign
// characters stay literal here; symbol substitution happens at format time.
pub fn affix(input: &mut &str) -> ModalResult<String> {
    repeat(0.., none_of(['0', '#', '@', ',', '.', ';']))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>())
        .parse_next(input)
}

// Integer-side layout run: digits, optional digits, significant markers and
// grouping commas.
pub fn integer_layout(input: &mut &str) -> ModalResult<Vec<char>> {
    repeat(1.., one_of(['0', '#', '@', ','])).parse_next(input)
}

// Fraction-side layout run. Non-zero digits are allowed here: they define a
// rounding increment (`"0.05"`).
pub fn fraction_layout(input: &mut &str) -> ModalResult<Vec<char>> {
    preceded('.', repeat(0.., one_of(('0'..='9', '#')))).parse_next(input)
}
