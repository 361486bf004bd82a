use vessel_parsec::parser::{
    Parser, any, attempt, between, collect, identifier, lexeme, many, satisfy, sep_by, string,
    symbol,
};
use vessel_parsec::{BoxedParser, NoMatch, SliceVessel, Spec, StrVessel, Vessel};

type Scoped = SliceVessel<char, Vec<String>>;

fn scoped(input: &str) -> Scoped {
    SliceVessel::from_text(input, Spec::default(), Vec::new())
}

/// An identifier that records itself in the vessel's state.
fn declare() -> BoxedParser<Scoped, String> {
    BoxedParser::new(|vessel: &mut Scoped| {
        let name = lexeme(identifier()).parse(vessel)?;
        vessel.state_mut().push(name.clone());
        Ok(name)
    })
}

#[test]
fn satisfy_advances_by_one_on_match() {
    for input in ["a", "abc", "a b"] {
        let mut vessel = StrVessel::text(input);
        let letter = satisfy(|c: &char| c.is_alphabetic());
        assert_eq!(letter.parse(&mut vessel), Ok('a'));
        assert_eq!(vessel.offset(), 1);
    }
}

#[test]
fn satisfy_leaves_offset_on_failure() {
    for input in ["", "1", " a"] {
        let mut vessel = StrVessel::text(input);
        let letter = satisfy(|c: &char| c.is_alphabetic());
        assert_eq!(letter.parse(&mut vessel), Err(NoMatch));
        assert_eq!(vessel.offset(), 0);
    }
}

#[test]
fn many_succeeds_on_any_input() {
    for input in ["", "x", "aaaa", "   "] {
        let mut vessel = StrVessel::text(input);
        assert!(many(string("a")).parse(&mut vessel).is_ok());
        assert!(many(symbol("x")).parse(&mut vessel).is_ok());
    }
}

#[test]
fn sep_by_returns_three_matches_with_trailing_delimiter() {
    let mut vessel = StrVessel::text("a,a,a,");
    let list = sep_by(string(","), string("a"));
    assert_eq!(list.parse(&mut vessel).map(|items| items.len()), Ok(3));
}

#[test]
fn attempt_restores_position_after_partial_consumption() {
    let inputs = ["abX", "ab", "a b c"];
    for input in inputs {
        let mut vessel = StrVessel::text(input);
        let before = vessel.position().clone();
        let sequence = attempt(collect(vec![string("a"), string("b"), string("c")]));
        assert_eq!(sequence.parse(&mut vessel), Err(NoMatch));
        assert_eq!(vessel.position(), &before);
    }
}

#[test]
fn attempt_restores_user_state() {
    let mut vessel = scoped("alpha beta ;");
    let declarations = attempt(collect(vec![declare(), declare(), declare()]));
    assert_eq!(declarations.parse(&mut vessel), Err(NoMatch));
    assert!(vessel.state().is_empty());
    assert_eq!(vessel.offset(), 0);
}

#[test]
fn state_survives_when_not_reverted() {
    let mut vessel = scoped("alpha beta ;");
    let declarations = collect(vec![declare(), declare(), declare()]);
    assert_eq!(declarations.parse(&mut vessel), Err(NoMatch));
    assert_eq!(vessel.state(), &vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn any_falls_through_to_second_alternative() {
    let mut vessel = StrVessel::text("ac...");
    let choice = any(vec![string("ab"), string("ac")]);
    assert_eq!(choice.parse(&mut vessel), Ok("ac".to_string()));
    assert_eq!(vessel.offset(), 2);
}

#[test]
fn between_symbols_around_identifier() {
    let mut vessel = StrVessel::text("(foo) rest");
    let wrapped = between(symbol("("), symbol(")"), identifier());
    assert_eq!(wrapped.parse(&mut vessel), Ok("foo".to_string()));
    assert_eq!(vessel.offset(), 6);
    assert_eq!(identifier().parse(&mut vessel), Ok("rest".to_string()));
}

#[test]
fn identifier_fails_on_leading_digit() {
    let mut vessel = StrVessel::text("7abc");
    assert_eq!(identifier().parse(&mut vessel), Err(NoMatch));
    assert_eq!(vessel.offset(), 0);
}

// Whitespace after a token is skipped even when the token itself failed.
#[test]
fn lexeme_skips_whitespace_after_failure() {
    let mut vessel = StrVessel::text("  x");
    assert_eq!(lexeme(string("ab")).parse(&mut vessel), Err(NoMatch));
    assert_eq!(vessel.offset(), 2);
}

#[test]
fn failed_lexeme_commits_an_alternative() {
    let mut vessel = StrVessel::text("  b");
    let choice = any(vec![symbol("a"), symbol("b")]);
    assert_eq!(choice.parse(&mut vessel), Err(NoMatch));
    assert_eq!(vessel.offset(), 2);

    let mut vessel = StrVessel::text("  b");
    let choice = any(vec![attempt(symbol("a")), attempt(symbol("b"))]);
    assert_eq!(choice.parse(&mut vessel), Err(NoMatch));
    assert_eq!(vessel.offset(), 0);
}

#[test]
fn position_tracks_lines_through_combinators() {
    let mut vessel = StrVessel::text("first\n  second third").with_name("words.txt");
    let words = many(lexeme(identifier()));
    assert_eq!(words.parse(&mut vessel).map(|w| w.len()), Ok(3));

    let position = vessel.position();
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 15);
    assert_eq!(position.to_string(), "words.txt:2:15");
}
