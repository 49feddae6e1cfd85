use indexmap::IndexMap;
use std::borrow::Cow;

pub mod children;
pub mod class;
pub mod node;
pub mod once;

pub use children::{Child, Children};
pub use class::Class;
pub use node::{Attributed, Element, Node, Parent, Prefixed, StartTag, Void};
pub use once::Once;

/// Attribute names mapped to their values, in insertion order. `None` marks a
/// valueless attribute.
pub type Attributes<'a> = IndexMap<Cow<'a, str>, Option<Cow<'a, str>>>;
