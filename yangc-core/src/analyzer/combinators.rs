//! Parser combinators: the building blocks the statement grammar is
//! composed from.
//!
//! * **Basic**: `Satisfy`, `Equal`, `Fail`
//! * **Sequential**: `Preceded`, `Tuple2`..`Tuple4`
//! * **Alternative**: `Choice`
//! * **Repetition**: `Many`, `Many1`
//! * **Transformation**: `Map`, `AsUnit`, `Optional`
//! * **Recursion and context**: `Lazy`, `WithContext`

use std::marker::PhantomData;

use super::core::ParseError;
use super::core::ParseResult;
use super::core::Parser;

/// Satisfy: applies a predicate-projection to the current token.
///
/// Succeeds and consumes one token when the closure returns `Some`, fails
/// without consuming otherwise.
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    f: F,
    expected: &'static str,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    pub fn new(f: F, expected: &'static str) -> Self {
        Self {
            f,
            expected,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    I: std::fmt::Display,
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        match input.get(pos) {
            Some(token) => match (self.f)(token) {
                Some(value) => Ok((pos + 1, value)),
                None => Err(ParseError::Unexpected {
                    expected: self.expected.to_string(),
                    found: token.to_string(),
                    position: pos,
                    context: None,
                }),
            },
            None => Err(ParseError::UnexpectedEof {
                position: pos,
                context: None,
            }),
        }
    }
}

/// Equal: matches one specific token and consumes it.
#[derive(Clone)]
pub struct Equal<I> {
    value: I,
}

impl<I> Equal<I> {
    pub fn new(value: I) -> Self {
        Self { value }
    }
}

impl<I: Clone + PartialEq + std::fmt::Display> Parser<I, I> for Equal<I> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<I> {
        match input.get(pos) {
            Some(found) if *found == self.value => Ok((pos + 1, found.clone())),
            Some(found) => Err(ParseError::Unexpected {
                expected: self.value.to_string(),
                found: found.to_string(),
                position: pos,
                context: None,
            }),
            None => Err(ParseError::UnexpectedEof {
                position: pos,
                context: None,
            }),
        }
    }
}

/// Fail: always fails with the given message.
#[derive(Clone)]
pub struct Fail<I, O> {
    message: String,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O> Fail<I, O> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<I, O> Parser<I, O> for Fail<I, O> {
    fn parse(&self, _input: &[I], pos: usize) -> ParseResult<O> {
        Err(ParseError::Failure {
            message: self.message.clone(),
            position: pos,
            context: None,
        })
    }
}

/// Choice: tries each child parser in order and returns the first success.
///
/// Alternation is ordered, which the grammar relies on (e.g. `leaf-list`
/// before `leaf`). All parsers failing yields `NoAlternative`.
pub struct Choice<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Choice<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, O> for Choice<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(input, pos) {
                return Ok(result);
            }
        }
        Err(ParseError::NoAlternative {
            position: pos,
            context: None,
        })
    }
}

/// Map: transforms the output of a parser with a function.
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    parser: P,
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, P, F> Parser<I, B> for Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        self.parser
            .parse(input, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

/// AsUnit: discards a parser's output.
#[derive(Clone)]
pub struct AsUnit<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> AsUnit<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, P, O> Parser<I, ()> for AsUnit<P, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<()> {
        self.parser.parse(input, pos).map(|(pos, _)| (pos, ()))
    }
}

/// Many: applies a parser zero or more times, collecting the results.
/// Always succeeds; the stopping error is logged at trace level.
#[derive(Clone)]
pub struct Many<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::new();
        let mut current_pos = pos;

        loop {
            match self.parser.parse(input, current_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "parser::many",
                        error = ?e,
                        position = current_pos,
                        items_collected = results.len(),
                        "many stopped collection"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// Many1: like [`Many`] but the first application must succeed.
#[derive(Clone)]
pub struct Many1<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many1<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many1<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let (pos, first) = self.parser.parse(input, pos)?;
        let mut results = vec![first];
        let mut current_pos = pos;

        while let Ok((new_pos, value)) = self.parser.parse(input, current_pos) {
            results.push(value);
            current_pos = new_pos;
        }

        Ok((current_pos, results))
    }
}

/// Optional: turns failure into `None` without consuming input.
#[derive(Clone)]
pub struct Optional<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Optional<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Option<O>> for Optional<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Option<O>> {
        match self.parser.parse(input, pos) {
            Ok((new_pos, value)) => Ok((new_pos, Some(value))),
            Err(e) => {
                tracing::trace!(
                    target: "parser::optional",
                    error = ?e,
                    position = pos,
                    "optional suppressed an error"
                );
                Ok((pos, None))
            }
        }
    }
}

/// Preceded: runs a unit parser, then the payload parser.
#[derive(Clone)]
pub struct Preceded<P1, P2, I, O> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O)>,
}

impl<P1, P2, I, O> Preceded<P1, P2, I, O> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O> Parser<I, O> for Preceded<P1, P2, I, O>
where
    P1: Parser<I, ()>,
    P2: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (pos, _) = self.parser1.parse(input, pos)?;
        let (pos, result) = self.parser2.parse(input, pos)?;
        Ok((pos, result))
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Tuple2<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, (O1, O2)> for Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        Ok((pos, (result1, result2)))
    }
}

#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, I, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(I, O1, O2, O3)>,
}

impl<P1, P2, P3, I, O1, O2, O3> Tuple3<P1, P2, P3, I, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, I, O1, O2, O3> Parser<I, (O1, O2, O3)> for Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        let (pos, result3) = self.parser3.parse(input, pos)?;
        Ok((pos, (result1, result2, result3)))
    }
}

#[derive(Clone)]
pub struct Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
    _phantom: PhantomData<(I, O1, O2, O3, O4)>,
}

impl<P1, P2, P3, P4, I, O1, O2, O3, O4> Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3, parser4: P4) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            parser4,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, P4, I, O1, O2, O3, O4> Parser<I, (O1, O2, O3, O4)>
    for Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
    P4: Parser<I, O4>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3, O4)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        let (pos, result3) = self.parser3.parse(input, pos)?;
        let (pos, result4) = self.parser4.parse(input, pos)?;
        Ok((pos, (result1, result2, result3, result4)))
    }
}

/// WithContext: wraps errors with a human-readable context frame.
#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P, C: ToString> Parser<I, O> for WithContext<P, C>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser
            .parse(input, pos)
            .map_err(|e| e.with_context(&self.context.to_string()))
    }
}

/// Lazy: defers construction of the inner parser until parse time, tying the
/// knot for mutually recursive productions.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<I, O, F, P> Parser<I, O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (self.f)().parse(input, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit() -> impl Parser<char, u32> {
        Satisfy::new(|c: &char| c.to_digit(10), "digit")
    }

    #[test]
    fn test_satisfy() {
        let input: Vec<char> = "1a".chars().collect();
        assert_eq!(digit().parse(&input, 0), Ok((1, 1)));
        assert!(matches!(
            digit().parse(&input, 1),
            Err(ParseError::Unexpected { position: 1, .. })
        ));
        assert!(matches!(
            digit().parse(&input, 2),
            Err(ParseError::UnexpectedEof { position: 2, .. })
        ));
    }

    #[test]
    fn test_equal() {
        let input: Vec<char> = "ab".chars().collect();
        let parser = Equal::new('a');
        assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));
        assert!(matches!(
            parser.parse(&input, 1),
            Err(ParseError::Unexpected { .. })
        ));
    }

    #[test]
    fn test_choice_ordering() {
        let input: Vec<char> = "2".chars().collect();
        let parser = Choice::new(vec![
            Box::new(Map::new(Equal::new('1'), |_| "one")),
            Box::new(Map::new(digit(), |_| "digit")),
        ]);
        assert_eq!(parser.parse(&input, 0), Ok((1, "digit")));

        let none: Choice<char, &str> = Choice::new(vec![
            Box::new(Fail::new("a")),
            Box::new(Fail::new("b")),
        ]);
        assert!(matches!(
            none.parse(&input, 0),
            Err(ParseError::NoAlternative { position: 0, .. })
        ));
    }

    #[test]
    fn test_many_and_many1() {
        let input: Vec<char> = "12a".chars().collect();
        assert_eq!(Many::new(digit()).parse(&input, 0), Ok((2, vec![1, 2])));
        assert_eq!(Many::new(digit()).parse(&input, 2), Ok((2, vec![])));
        assert_eq!(Many1::new(digit()).parse(&input, 0), Ok((2, vec![1, 2])));
        assert!(Many1::new(digit()).parse(&input, 2).is_err());
    }

    #[test]
    fn test_optional() {
        let input: Vec<char> = "a1".chars().collect();
        assert_eq!(Optional::new(digit()).parse(&input, 0), Ok((0, None)));
        assert_eq!(Optional::new(digit()).parse(&input, 1), Ok((2, Some(1))));
    }

    #[test]
    fn test_preceded_and_tuples() {
        let input: Vec<char> = "a12".chars().collect();
        let parser = Preceded::new(AsUnit::new(Equal::new('a')), digit());
        assert_eq!(parser.parse(&input, 0), Ok((2, 1)));

        let pair = Tuple2::new(digit(), digit());
        assert_eq!(pair.parse(&input, 1), Ok((3, (1, 2))));

        let triple = Tuple3::new(Equal::new('a'), digit(), digit());
        assert_eq!(triple.parse(&input, 0), Ok((3, ('a', 1, 2))));
    }

    #[test]
    fn test_with_context_chains() {
        let input: Vec<char> = "a".chars().collect();
        let parser = WithContext::new(WithContext::new(digit(), "inner"), "outer");
        match parser.parse(&input, 0) {
            Err(ParseError::Unexpected { context, .. }) => {
                assert_eq!(context.as_deref(), Some("inner -> outer"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lazy_recursion() {
        // Matches a chain of 'a's terminated by '.': a a a .
        fn chain() -> impl Parser<char, usize> {
            Choice::new(vec![
                Box::new(Map::new(Equal::new('.'), |_| 0)),
                Box::new(Map::new(
                    Tuple2::new(Equal::new('a'), Lazy::new(chain)),
                    |(_, n)| n + 1,
                )),
            ])
        }
        let input: Vec<char> = "aaa.".chars().collect();
        assert_eq!(chain().parse(&input, 0), Ok((4, 3)));
    }
}
