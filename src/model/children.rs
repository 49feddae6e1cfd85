use super::node::{Element, Node, Prefixed, Void};
use super::once::Once;
use std::borrow::Cow;

/// The content of an element or fragment.
#[derive(Debug)]
pub enum Children<'a> {
  Node(Box<Node<'a>>),
  Text(Cow<'a, str>),
  List(Vec<Child<'a>>),
  Lazy(Once<'a, Child<'a>>),
}

/// A single entry of a child list.
///
/// `Unsupported` stands in for values that are neither nodes nor strings. It
/// keeps the name of the original type and renders nothing, unless the render
/// is strict.
#[derive(Debug)]
pub enum Child<'a> {
  Node(Node<'a>),
  Text(Cow<'a, str>),
  Unsupported(&'static str),
}

impl<'a> Children<'a> {
  /// Children produced on demand by `iter`. They can be rendered once.
  pub fn lazy<I>(iter: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Child<'a>> + 'a,
    I::IntoIter: Send + 'a,
  {
    Children::Lazy(Once::new(iter.into_iter().map(Into::into)))
  }

  /// Appends `child`. Pushing onto one-shot children that were already
  /// rendered drops `child`, so they keep rendering nothing.
  pub fn push(&mut self, child: Child<'a>) {
    match std::mem::take(self) {
      Children::List(mut children) => {
        children.push(child);
        *self = Children::List(children);
      }
      Children::Node(node) => *self = Children::List(vec![Child::Node(*node), child]),
      Children::Text(text) => *self = Children::List(vec![Child::Text(text), child]),
      Children::Lazy(once) => *self = Children::Lazy(once.chain(child)),
    }
  }
}

impl<'a> Default for Children<'a> {
  fn default() -> Self {
    Children::List(Vec::new())
  }
}

impl<'a> From<()> for Children<'a> {
  fn from(_: ()) -> Children<'a> {
    Children::default()
  }
}

impl<'a> From<&'a str> for Children<'a> {
  fn from(value: &'a str) -> Children<'a> {
    Children::Text(value.into())
  }
}

impl<'a> From<String> for Children<'a> {
  fn from(value: String) -> Children<'a> {
    Children::Text(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Children<'a> {
  fn from(value: Cow<'a, str>) -> Children<'a> {
    Children::Text(value)
  }
}

impl<'a> From<Child<'a>> for Children<'a> {
  fn from(value: Child<'a>) -> Children<'a> {
    match value {
      Child::Node(node) => Children::Node(Box::new(node)),
      Child::Text(text) => Children::Text(text),
      unsupported => Children::List(vec![unsupported]),
    }
  }
}

impl<'a, T: Into<Child<'a>>> From<Vec<T>> for Children<'a> {
  fn from(value: Vec<T>) -> Children<'a> {
    Children::List(value.into_iter().map(Into::into).collect())
  }
}

impl<'a, T: Into<Child<'a>>, const N: usize> From<[T; N]> for Children<'a> {
  fn from(value: [T; N]) -> Children<'a> {
    Children::List(value.into_iter().map(Into::into).collect())
  }
}

impl<'a> From<&'a str> for Child<'a> {
  fn from(value: &'a str) -> Child<'a> {
    Child::Text(value.into())
  }
}

impl<'a> From<String> for Child<'a> {
  fn from(value: String) -> Child<'a> {
    Child::Text(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Child<'a> {
  fn from(value: Cow<'a, str>) -> Child<'a> {
    Child::Text(value)
  }
}

impl<'a> From<Node<'a>> for Child<'a> {
  fn from(value: Node<'a>) -> Child<'a> {
    Child::Node(value)
  }
}

macro_rules! node_conversions {
  ($($kind:ident),+) => {
    $(
      impl<'a> From<$kind<'a>> for Child<'a> {
        fn from(value: $kind<'a>) -> Child<'a> {
          Child::Node(value.into())
        }
      }

      impl<'a> From<$kind<'a>> for Children<'a> {
        fn from(value: $kind<'a>) -> Children<'a> {
          Children::Node(Box::new(value.into()))
        }
      }
    )+
  };
}

node_conversions!(Void, Element, Prefixed);

impl<'a> From<Node<'a>> for Children<'a> {
  fn from(value: Node<'a>) -> Children<'a> {
    Children::Node(Box::new(value))
  }
}

macro_rules! unsupported_conversions {
  ($($kind:ty),+) => {
    $(
      impl<'a> From<$kind> for Child<'a> {
        fn from(_: $kind) -> Child<'a> {
          Child::Unsupported(stringify!($kind))
        }
      }
    )+
  };
}

unsupported_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, ());
