//! Ready-made parsers for common pieces of text

pub mod any_of;
pub mod char;
pub mod digit;
pub mod letter;
pub mod number;
pub mod string;
pub mod take_while;
pub mod whitespace;

pub use any_of::{any_of, none_of};
pub use char::{IsChar, any_char, is_char};
pub use digit::{digit, digits};
pub use letter::letter;
pub use number::{decimal, integer};
pub use string::{IsStringParser, is_string};
pub use take_while::{SkipWhile, TakeWhile, skip_while, take_while};
pub use whitespace::{lexeme, space, spaces};
