use crate::error::Error;
use crate::model::{Attributed, Class, StartTag};
use pest::iterators::Pair;
use pest::Parser;
use std::borrow::Cow;

#[derive(Parser)]
#[grammar = "tag.pest"]
struct ShorthandParser;

/// Parses tag shorthand such as `div#main.card.shadow[data-id=7][hidden]`.
///
/// The id becomes the `id` attribute, classes are collected in order, and
/// bracketed attributes follow in the order written. An attribute without `=`
/// is valueless.
pub fn parse(input: &str) -> Result<StartTag<'_>, Error> {
  let shorthand = ShorthandParser::parse(Rule::Shorthand, input)
    .map_err(Box::new)?
    .next()
    .map(Pair::into_inner);

  let mut start = StartTag::default();
  let mut classes: Vec<Cow<str>> = Vec::new();

  for pair in shorthand.into_iter().flatten() {
    match pair.as_rule() {
      Rule::Name => start.name = pair.as_str().into(),
      Rule::Id => {
        if let Some(id) = pair.into_inner().next() {
          start.attributes.insert("id".into(), Some(id.as_str().into()));
        }
      }
      Rule::Class => classes.extend(pair.into_inner().map(|name| name.as_str().into())),
      Rule::Attribute => {
        let mut inner = pair.into_inner();
        if let Some(name) = inner.next() {
          let value = inner.next().map(|value| value.as_str().into());
          start.attributes.insert(name.as_str().into(), value);
        }
      }
      _ => (),
    }
  }

  if !classes.is_empty() {
    start = start.class(Class::List(classes));
  }

  Ok(start)
}
