//! Parsers that look at the input directly. Everything else is built from these.

use crate::error::NoMatch;
use crate::vessel::Vessel;

use super::combinators::BoxedParser;

/// One element for which `predicate` holds. Consumes nothing on failure.
pub fn satisfy<V, F>(predicate: F) -> BoxedParser<V, V::Element>
where
    V: Vessel + 'static,
    F: Fn(&V::Element) -> bool + 'static,
{
    BoxedParser::new(move |vessel: &mut V| match vessel.next() {
        Some(element) if predicate(element) => {
            let element = element.clone();
            vessel.pop(1);
            Ok(element)
        }
        _ => Err(NoMatch),
    })
}

/// Exactly the element `expected`.
pub fn token<V>(expected: V::Element) -> BoxedParser<V, V::Element>
where
    V: Vessel + 'static,
    V::Element: PartialEq,
{
    satisfy(move |element: &V::Element| *element == expected)
}

/// The exact run of elements `expected`. Consumes nothing on failure.
pub fn tokens<V>(expected: Vec<V::Element>) -> BoxedParser<V, Vec<V::Element>>
where
    V: Vessel + 'static,
    V::Element: PartialEq,
{
    BoxedParser::new(move |vessel: &mut V| match vessel.get(expected.len()) {
        Some(next) if next == expected.as_slice() => {
            vessel.pop(expected.len());
            Ok(expected.clone())
        }
        _ => Err(NoMatch),
    })
}

/// Succeeds only at end of input.
pub fn eof<V: Vessel + 'static>() -> BoxedParser<V, ()> {
    BoxedParser::new(|vessel: &mut V| if vessel.at_end() { Ok(()) } else { Err(NoMatch) })
}

// === Text ===

/// The literal `s`, counted in chars.
pub fn string<V>(s: &str) -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    let literal = s.to_string();
    let expected: Vec<char> = s.chars().collect();
    BoxedParser::new(move |vessel: &mut V| match vessel.get(expected.len()) {
        Some(next) if next == expected.as_slice() => {
            vessel.pop(expected.len());
            Ok(literal.clone())
        }
        _ => Err(NoMatch),
    })
}

pub fn character<V>(c: char) -> BoxedParser<V, char>
where
    V: Vessel<Element = char> + 'static,
{
    token(c)
}

/// Any char contained in `set`.
pub fn one_of<V>(set: &str) -> BoxedParser<V, char>
where
    V: Vessel<Element = char> + 'static,
{
    let set: Vec<char> = set.chars().collect();
    satisfy(move |c: &char| set.contains(c))
}

/// Any char not contained in `set`.
pub fn none_of<V>(set: &str) -> BoxedParser<V, char>
where
    V: Vessel<Element = char> + 'static,
{
    let set: Vec<char> = set.chars().collect();
    satisfy(move |c: &char| !set.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::vessel::StrVessel;

    #[test]
    fn satisfy_consumes_one_matching_element() {
        let mut v = StrVessel::text("7a");
        let digit = satisfy(|c: &char| c.is_ascii_digit());
        assert_eq!(digit.parse(&mut v), Ok('7'));
        assert_eq!(v.offset(), 1);
        assert_eq!(digit.parse(&mut v), Err(NoMatch));
        assert_eq!(v.offset(), 1);
    }

    #[test]
    fn satisfy_fails_on_empty_input() {
        let mut v = StrVessel::text("");
        assert_eq!(satisfy(|_: &char| true).parse(&mut v), Err(NoMatch));
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn string_matches_prefix_only() {
        let mut v = StrVessel::text("letter");
        assert_eq!(string("let").parse(&mut v), Ok("let".to_string()));
        assert_eq!(v.offset(), 3);
        assert_eq!(string("tex").parse(&mut v), Err(NoMatch));
        assert_eq!(v.offset(), 3);
    }

    #[test]
    fn string_counts_chars() {
        let mut v = StrVessel::text("λx.x");
        assert_eq!(string("λx").parse(&mut v), Ok("λx".to_string()));
        assert_eq!(v.offset(), 2);
    }

    #[test]
    fn string_fails_when_input_runs_out() {
        let mut v = StrVessel::text("ab");
        assert_eq!(string("abc").parse(&mut v), Err(NoMatch));
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn empty_string_always_matches() {
        let mut v = StrVessel::text("");
        assert_eq!(string("").parse(&mut v), Ok(String::new()));
    }

    #[test]
    fn one_of_and_none_of() {
        let mut v = StrVessel::text("+x");
        assert_eq!(one_of("+-").parse(&mut v), Ok('+'));
        assert_eq!(one_of("+-").parse(&mut v), Err(NoMatch));
        assert_eq!(none_of("+-").parse(&mut v), Ok('x'));
    }

    #[test]
    fn eof_only_at_end() {
        let mut v = StrVessel::text("a");
        assert_eq!(eof().parse(&mut v), Err(NoMatch));
        v.pop(1);
        assert_eq!(eof().parse(&mut v), Ok(()));
    }

    #[test]
    fn tokens_match_element_runs() {
        let mut v = StrVessel::text("abc");
        assert_eq!(tokens(vec!['a', 'b']).parse(&mut v), Ok(vec!['a', 'b']));
        assert_eq!(tokens(vec!['a']).parse(&mut v), Err(NoMatch));
        assert_eq!(v.offset(), 2);
    }
}
