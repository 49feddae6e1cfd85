use super::once::Once;
use std::borrow::Cow;

/// The value of an element's `class` attribute.
///
/// A single name is rendered as given; lists and one-shot producers are joined
/// with single spaces. An empty result renders no attribute at all.
#[derive(Debug)]
pub enum Class<'a> {
  Name(Cow<'a, str>),
  List(Vec<Cow<'a, str>>),
  Lazy(Once<'a, Cow<'a, str>>),
}

impl<'a> Class<'a> {
  pub fn lazy<I>(names: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Cow<'a, str>> + 'a,
    I::IntoIter: Send + 'a,
  {
    Class::Lazy(Once::new(names.into_iter().map(Into::into)))
  }

  /// Adds `name` to the end of the list.
  pub fn push(&mut self, name: impl Into<Cow<'a, str>>) {
    let name = name.into();
    match self {
      Class::List(names) => names.push(name),
      Class::Name(existing) => {
        let existing = std::mem::take(existing);
        *self = Class::List(vec![existing, name]);
      }
      Class::Lazy(_) => {
        if let Class::Lazy(once) = std::mem::take(self) {
          *self = Class::Lazy(once.chain(name));
        }
      }
    }
  }
}

impl<'a> Default for Class<'a> {
  fn default() -> Self {
    Class::List(Vec::new())
  }
}

impl<'a> From<&'a str> for Class<'a> {
  fn from(value: &'a str) -> Class<'a> {
    Class::Name(value.into())
  }
}

impl<'a> From<String> for Class<'a> {
  fn from(value: String) -> Class<'a> {
    Class::Name(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Class<'a> {
  fn from(value: Cow<'a, str>) -> Class<'a> {
    Class::Name(value)
  }
}

impl<'a, T: Into<Cow<'a, str>>> From<Vec<T>> for Class<'a> {
  fn from(value: Vec<T>) -> Class<'a> {
    Class::List(value.into_iter().map(Into::into).collect())
  }
}

impl<'a, T: Into<Cow<'a, str>>, const N: usize> From<[T; N]> for Class<'a> {
  fn from(value: [T; N]) -> Class<'a> {
    Class::List(value.into_iter().map(Into::into).collect())
  }
}
