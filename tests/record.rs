use pretty_assertions::assert_eq;
use textcomb::prelude::*;
use textcomb::text::{decimal, is_char, is_string, letter, spaces, take_while};

#[derive(Debug, Clone, PartialEq)]
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

fn name<'code>() -> impl Parser<'code, Output = String> {
    map2(letter(), take_while(|c| c.is_alphabetic() || c == ' '), |first, rest| {
        format!("{first}{rest}").trim_end().to_string()
    })
}

fn email<'code>() -> impl Parser<'code, Output = String> {
    take_while(|c| c != ';' && !c.is_whitespace())
        .bind(|address| {
            from_fn("email", move |cursor: TextCursor<'code>| {
                if address.contains('@') {
                    Ok((address.clone(), cursor))
                } else {
                    Err(textcomb::Diagnostic::new(
                        "email",
                        format!("missing '@' in {address}"),
                        cursor.position(),
                    ))
                }
            })
        })
}

fn person<'code>() -> impl Parser<'code, Output = Person> {
    map3(
        field("name", name()).then_ignore(separator()),
        field("age", decimal()),
        separator().ignore_then(field("email", email())).optional(),
        |name, age, email| Person { name, age, email },
    )
    .with_label("person")
}

fn end_of_record<'code>() -> impl Parser<'code, Output = ()> {
    from_fn("end of record", |cursor: TextCursor<'code>| match cursor.value() {
        None => Ok(((), cursor)),
        Some(ch) => Err(textcomb::Diagnostic::new(
            "end of record",
            format!("Unexpected '{ch}'"),
            cursor.position(),
        )),
    })
}

#[test]
fn test_person_with_email() {
    let person = person()
        .run_or_fail("name=Ada Lovelace; age=36; email=ada@example.org")
        .unwrap();

    assert_eq!(
        person,
        Person {
            name: "Ada Lovelace".to_string(),
            age: 36,
            email: Some("ada@example.org".to_string()),
        }
    );
}

#[test]
fn test_person_without_email() {
    let outcome = person().run("name=Alan; age=41");

    assert_eq!(
        outcome.value(),
        Some(&Person {
            name: "Alan".to_string(),
            age: 41,
            email: None,
        })
    );
    assert_eq!(outcome.remaining().map(|c| c.rest()), Some(""));
}

#[test]
fn test_invalid_email_is_left_unparsed() {
    // The optional email block backtracks as a whole
    let outcome = person().run("name=Grace; age=85; email=grace");

    assert_eq!(outcome.value().map(|p| p.email.clone()), Some(None));
    assert_eq!(
        outcome.remaining().map(|c| c.rest()),
        Some("; email=grace")
    );
}

#[test]
fn test_missing_age_reports_field() {
    let error = person().run_or_fail("name=Edsger; years=72").unwrap_err();

    assert_eq!(error.diagnostic().label(), "string \"age\"");
    assert_eq!(error.diagnostic().context(), ["age", "person"]);
    assert_eq!(error.location().column, 14);
}

#[test]
fn test_bad_age_value() {
    let error = person().run_or_fail("name=Linus; age=old").unwrap_err();

    assert_eq!(
        error.to_string(),
        "number: Unexpected 'o', in age, in person at line 1, column 17"
    );
}

#[test]
fn test_several_people() {
    let people = sep_by1(person(), is_char('\n'))
        .run_or_fail("name=Ada; age=36\nname=Alan; age=41; email=alan@example.org")
        .unwrap();

    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Alan"]);
    assert_eq!(people[1].email.as_deref(), Some("alan@example.org"));
}

#[test]
fn test_trailing_junk_after_record() {
    let line = person().then_ignore(spaces()).then_ignore(end_of_record());

    assert!(line.run_or_fail("name=Ada; age=36  ").is_ok());

    let error = line.run_or_fail("name=Ada; age=36 years").unwrap_err();
    assert_eq!(
        error.to_string(),
        "end of record: Unexpected 'y' at line 1, column 18"
    );
}
