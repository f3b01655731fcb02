//! Lowercase constructor functions for the combinators.
//!
//! Grammar code reads as `map(tuple2(...), |..| ..)` rather than
//! `Map::new(Tuple2::new(...), ..)`.

use super::combinators::{
    AsUnit, Choice, Equal, Fail, Lazy, Many, Many1, Map, Optional, Preceded, Satisfy, Tuple2,
    Tuple3, Tuple4, WithContext,
};
use super::core::Parser;

pub fn satisfy<I, O, F>(f: F, expected: &'static str) -> Satisfy<I, O, F>
where
    F: Fn(&I) -> Option<O>,
{
    Satisfy::new(f, expected)
}

pub fn equal<I>(value: I) -> Equal<I> {
    Equal::new(value)
}

pub fn fail<I, O>(message: &str) -> Fail<I, O> {
    Fail::new(message)
}

pub fn choice<I, O>(parsers: Vec<Box<dyn Parser<I, O>>>) -> Choice<I, O> {
    Choice::new(parsers)
}

pub fn map<P, F, A, B>(parser: P, f: F) -> Map<P, F, A, B>
where
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn as_unit<P, O>(parser: P) -> AsUnit<P, O> {
    AsUnit::new(parser)
}

pub fn many<P, I, O>(parser: P) -> Many<P, I, O> {
    Many::new(parser)
}

pub fn many1<P, I, O>(parser: P) -> Many1<P, I, O> {
    Many1::new(parser)
}

pub fn optional<P, I, O>(parser: P) -> Optional<P, I, O> {
    Optional::new(parser)
}

pub fn preceded<P1, P2, I, O>(parser1: P1, parser2: P2) -> Preceded<P1, P2, I, O> {
    Preceded::new(parser1, parser2)
}

pub fn tuple2<P1, P2, I, O1, O2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2, I, O1, O2> {
    Tuple2::new(parser1, parser2)
}

pub fn tuple3<P1, P2, P3, I, O1, O2, O3>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
) -> Tuple3<P1, P2, P3, I, O1, O2, O3> {
    Tuple3::new(parser1, parser2, parser3)
}

pub fn tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
) -> Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4> {
    Tuple4::new(parser1, parser2, parser3, parser4)
}

pub fn lazy<F, P, I, O>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    Lazy::new(f)
}

pub fn with_context<P, C>(parser: P, context: C) -> WithContext<P, C>
where
    C: ToString,
{
    WithContext::new(parser, context)
}
