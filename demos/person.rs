//! Parse `key=value` person records, one per line
//!
//! ```text
//! printf 'name=Ada; age=36\nname=Alan; age=41; email=alan@example.org\n' \
//!     | cargo run --example person
//! ```

use std::io::{self, Read};
use std::process::ExitCode;
use textcomb::Diagnostic;
use textcomb::prelude::*;
use textcomb::text::{decimal, is_char, is_string, letter, spaces, take_while};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Person {
    name: String,
    age: u64,
    email: Option<String>,
}

fn field<'code, P>(key: &'static str, value: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    is_string(key)
        .ignore_then(is_char('='))
        .ignore_then(value)
        .with_label(key)
}

fn separator<'code>() -> impl Parser<'code, Output = ()> {
    is_char(';').ignore_then(spaces())
}

fn person<'code>() -> impl Parser<'code, Output = Person> {
    let name = map2(
        letter(),
        take_while(|c| c.is_alphabetic() || c == ' '),
        |first, rest| format!("{first}{rest}").trim_end().to_string(),
    );
    let email = take_while(|c| c != ';' && !c.is_whitespace());

    map3(
        field("name", name).then_ignore(separator()),
        field("age", decimal()),
        separator().ignore_then(field("email", email)).optional(),
        |name, age, email| Person { name, age, email },
    )
    .with_label("person")
}

fn end_of_record<'code>() -> impl Parser<'code, Output = ()> {
    from_fn("end of record", |cursor: TextCursor<'code>| match cursor.value() {
        None => Ok(((), cursor)),
        Some(ch) => Err(Diagnostic::new(
            "end of record",
            format!("Unexpected '{ch}'"),
            cursor.position(),
        )),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut input = String::new();
    if let Err(error) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {error}");
        return ExitCode::FAILURE;
    }

    let parser = person().then_ignore(spaces()).then_ignore(end_of_record());
    let mut failures = 0;
    for (number, line) in input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
        match parser.run_or_fail(line) {
            Ok(person) => {
                info!(
                    line = number + 1,
                    name = %person.name,
                    age = person.age,
                    email = person.email.as_deref().unwrap_or("-"),
                    "parsed record"
                );
                println!("{person:?}");
            }
            Err(error) => {
                warn!(line = number + 1, %error, "skipping record");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
