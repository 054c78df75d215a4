use crate::parser::Parser;
use crate::satisfy::satisfy;

/// Parser that matches a single Unicode letter
pub fn letter() -> impl for<'code> Parser<'code, Output = char> + Clone {
    satisfy(char::is_alphabetic, "letter")
}
