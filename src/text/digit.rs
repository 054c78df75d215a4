use crate::many1::many1;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::satisfy::satisfy;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> impl for<'code> Parser<'code, Output = char> + Clone {
    satisfy(|c| c.is_ascii_digit(), "digit")
}

/// Parser that matches one or more ASCII digits and returns them as text
pub fn digits() -> impl for<'code> Parser<'code, Output = String> + Clone {
    many1(digit()).map(|digits| digits.into_iter().collect::<String>())
}
