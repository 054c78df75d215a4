//! # textcomb - Parser Combinator Library
//!
//! Small parsers over UTF-8 text that combine into larger ones.
//!
//! A parser takes a [`TextCursor`] and either returns a value together with
//! the cursor after it, or a [`Diagnostic`] saying what it expected. Cursors
//! are cheap copies, so trying an alternative after a failure is just parsing
//! again from the cursor you already had.
//!
//! - **Zero panics**: parse failures are values, never panics
//! - **Backtracking**: a failed parser never consumes input
//! - **Composability**: every combinator is both a free function and a method
//!   from an extension trait (see [`prelude`])
//!
//! ```
//! use textcomb::prelude::*;
//! use textcomb::text::{decimal, is_char, spaces};
//!
//! let list = between(
//!     is_char('['),
//!     sep_by(decimal(), is_char(',').then_ignore(spaces())),
//!     is_char(']'),
//! );
//!
//! assert_eq!(list.run_optional("[1, 2, 3]"), Some(vec![1, 2, 3]));
//! assert!(list.run_or_fail("[1, x]").is_err());
//! ```

pub mod and;
pub mod apply;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod cursor;
pub mod cursors;
pub mod discard;
pub mod error;
pub mod label;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod map;
pub mod option;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod satisfy;
pub mod separated_list;
pub mod sequence;
pub mod succeed;
pub mod text;

pub use boxed::BoxedParser;
pub use cursor::Cursor;
pub use cursors::TextCursor;
pub use error::{Diagnostic, Location, ParseError};
pub use outcome::Outcome;
pub use parser::{ParseResult, Parser, from_fn, run, run_optional, run_or_fail};

/// Everything needed to write grammars: the core traits, every combinator
/// constructor and the extension traits that provide the method syntax
pub mod prelude {
    pub use crate::and::{AndExt, and};
    pub use crate::apply::{ApplyExt, apply, map2, map3};
    pub use crate::between::between;
    pub use crate::bind::{BindExt, bind};
    pub use crate::boxed::{BoxedExt, BoxedParser};
    pub use crate::choice;
    pub use crate::cursor::Cursor;
    pub use crate::cursors::TextCursor;
    pub use crate::discard::{DiscardExt, discard_left, discard_right};
    pub use crate::label::{LabelExt, with_label};
    pub use crate::lazy::lazy;
    pub use crate::many::{ManyExt, many};
    pub use crate::many1::{Many1Ext, many1};
    pub use crate::map::{MapExt, map};
    pub use crate::option::{OptionExt, option, optional};
    pub use crate::or::{OrExt, or};
    pub use crate::outcome::Outcome;
    pub use crate::parser::{ParseResult, Parser, from_fn};
    pub use crate::satisfy::satisfy;
    pub use crate::separated_list::{SepByExt, sep_by, sep_by1};
    pub use crate::sequence::sequence;
    pub use crate::succeed::succeed;
}

#[cfg(test)]
#[ctor::ctor]
fn init_tests() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");
}
