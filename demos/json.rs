//! Parse a JSON document and print it back in a compact form
//!
//! ```text
//! cargo run --example json -- '{"a": [1, 2, {"b": null}]}'
//! RUST_LOG=textcomb=debug cargo run --example json -- '[1, 2,'
//! ```

use std::fmt;
use std::process::ExitCode;
use textcomb::prelude::*;
use textcomb::text::{any_of, decimal, digits, is_char, is_string, lexeme, none_of, spaces};
use textcomb::{Diagnostic, ParseError};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"{"name": "textcomb", "tags": ["parser", "demo"], "stars": 4.5, "archived": false}"#;

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Json::Null => write!(f, "null"),
            Json::Bool(b) => write!(f, "{b}"),
            Json::Number(n) => write!(f, "{n}"),
            Json::String(s) => write!(f, "{s:?}"),
            Json::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Json::Object(members) => {
                write!(f, "{{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key:?}:{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn number<'code>() -> impl Parser<'code, Output = f64> + Clone {
    map3(
        is_char('-').optional(),
        decimal(),
        is_char('.').ignore_then(digits()).optional(),
        |sign, whole, fraction| {
            let text = match fraction {
                Some(fraction) => format!("{whole}.{fraction}"),
                None => whole.to_string(),
            };
            let value = text.parse::<f64>().unwrap_or(whole as f64);
            if sign.is_some() { -value } else { value }
        },
    )
    .with_label("number")
}

fn string_literal<'code>() -> impl Parser<'code, Output = String> + Clone {
    let escaped = is_char('\\').ignore_then(any_of("\"\\/bfnrt").map(|c| match c {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }));
    between(
        is_char('"'),
        many(choice![none_of("\"\\"), escaped]),
        is_char('"'),
    )
    .map(|chars| chars.into_iter().collect::<String>())
    .with_label("string")
}

fn value<'code>() -> BoxedParser<'code, Json> {
    let array = between(
        lexeme(is_char('[')),
        sep_by(lazy(value), lexeme(is_char(','))),
        is_char(']'),
    )
    .map(Json::Array)
    .with_label("array");

    let member = map3(
        lexeme(string_literal()),
        lexeme(is_char(':')),
        lazy(value),
        |key, _, json| (key, json),
    );
    let object = between(
        lexeme(is_char('{')),
        sep_by(member, lexeme(is_char(','))),
        is_char('}'),
    )
    .map(Json::Object)
    .with_label("object");

    choice![
        is_string("null").map(|_| Json::Null).boxed(),
        is_string("true").map(|_| Json::Bool(true)).boxed(),
        is_string("false").map(|_| Json::Bool(false)).boxed(),
        number().map(Json::Number).boxed(),
        string_literal().map(Json::String).boxed(),
        array.boxed(),
        object.boxed(),
    ]
    .then_ignore(spaces())
    .boxed()
}

fn end_of_input<'code>() -> impl Parser<'code, Output = ()> {
    from_fn("end of input", |cursor: TextCursor<'code>| match cursor.value() {
        None => Ok(((), cursor)),
        Some(ch) => Err(Diagnostic::new(
            "end of input",
            format!("Unexpected '{ch}'"),
            cursor.position(),
        )),
    })
}

fn parse_json(input: &str) -> Result<Json, ParseError> {
    spaces()
        .ignore_then(value())
        .then_ignore(end_of_input())
        .run_or_fail(input)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());
    info!(bytes = input.len(), "parsing document");

    match parse_json(&input) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error.diagnostic().render(&input));
            ExitCode::FAILURE
        }
    }
}
