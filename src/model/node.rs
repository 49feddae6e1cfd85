use super::children::{Child, Children};
use super::class::Class;
use super::Attributes;
use crate::error::Error;
use crate::tag;
use std::borrow::Cow;

/// The part of an element that ends up inside its start tag.
#[derive(Debug, Default)]
pub struct StartTag<'a> {
  pub name: Cow<'a, str>,
  pub class: Class<'a>,
  pub attributes: Attributes<'a>,
}

impl<'a> StartTag<'a> {
  pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
    StartTag {
      name: name.into(),
      ..StartTag::default()
    }
  }
}

/// An element without content or end tag, serialized as `<name/>`.
#[derive(Debug)]
pub struct Void<'a> {
  pub start: StartTag<'a>,
}

/// An element with a start tag, children and an end tag.
#[derive(Debug)]
pub struct Element<'a> {
  pub start: StartTag<'a>,
  pub children: Children<'a>,
}

/// An element preceded by a literal prefix, e.g. the doctype before `<html>`.
#[derive(Debug)]
pub struct Prefixed<'a> {
  pub prefix: Cow<'a, str>,
  pub element: Element<'a>,
}

#[derive(Debug)]
pub enum Node<'a> {
  SelfClosing(Void<'a>),
  Element(Element<'a>),
  Prefixed(Prefixed<'a>),
  /// Markup emitted verbatim. Nothing inside it is escaped.
  Raw(Cow<'a, str>),
  /// Children rendered without an enclosing tag.
  Fragment(Children<'a>),
}

impl<'a> Void<'a> {
  pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
    Void {
      start: StartTag::new(name),
    }
  }

  /// Builds a void element from shorthand such as `img.db[alt=Logo]`.
  pub fn from_shorthand(input: &'a str) -> Result<Self, Error> {
    Ok(Void::from(tag::parse(input)?))
  }
}

impl<'a> Element<'a> {
  pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
    Element::from(StartTag::new(name))
  }

  /// Builds an element from shorthand such as `div#main.card[hidden]`.
  pub fn from_shorthand(input: &'a str) -> Result<Self, Error> {
    Ok(Element::from(tag::parse(input)?))
  }

  /// Puts `prefix` in front of the element.
  pub fn prefixed(self, prefix: impl Into<Cow<'a, str>>) -> Prefixed<'a> {
    Prefixed {
      prefix: prefix.into(),
      element: self,
    }
  }
}

impl<'a> From<StartTag<'a>> for Void<'a> {
  fn from(start: StartTag<'a>) -> Void<'a> {
    Void { start }
  }
}

impl<'a> From<StartTag<'a>> for Element<'a> {
  fn from(start: StartTag<'a>) -> Element<'a> {
    Element {
      start,
      children: Children::default(),
    }
  }
}

impl<'a> Node<'a> {
  pub fn raw(html: impl Into<Cow<'a, str>>) -> Self {
    Node::Raw(html.into())
  }

  pub fn fragment(children: impl Into<Children<'a>>) -> Self {
    Node::Fragment(children.into())
  }
}

impl<'a> From<Void<'a>> for Node<'a> {
  fn from(value: Void<'a>) -> Node<'a> {
    Node::SelfClosing(value)
  }
}

impl<'a> From<Element<'a>> for Node<'a> {
  fn from(value: Element<'a>) -> Node<'a> {
    Node::Element(value)
  }
}

impl<'a> From<Prefixed<'a>> for Node<'a> {
  fn from(value: Prefixed<'a>) -> Node<'a> {
    Node::Prefixed(value)
  }
}

/// Builder methods for everything that owns a start tag.
pub trait Attributed<'a>: Sized {
  fn start_tag_mut(&mut self) -> &mut StartTag<'a>;

  fn class(mut self, class: impl Into<Class<'a>>) -> Self {
    self.start_tag_mut().class = class.into();
    self
  }

  /// Sets `name="value"`. Setting a name twice keeps its first position.
  fn attr(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
    self
      .start_tag_mut()
      .attributes
      .insert(name.into(), Some(value.into()));
    self
  }

  /// Sets a valueless attribute such as `disabled`.
  fn flag(mut self, name: impl Into<Cow<'a, str>>) -> Self {
    self.start_tag_mut().attributes.insert(name.into(), None);
    self
  }

  fn attrs(mut self, attributes: impl IntoIterator<Item = (Cow<'a, str>, Option<Cow<'a, str>>)>) -> Self {
    self.start_tag_mut().attributes.extend(attributes);
    self
  }
}

/// Builder methods for elements that take children.
pub trait Parent<'a>: Sized {
  fn children_mut(&mut self) -> &mut Children<'a>;

  /// Replaces the children.
  fn children(mut self, children: impl Into<Children<'a>>) -> Self {
    *self.children_mut() = children.into();
    self
  }

  /// Appends one child.
  fn child(mut self, child: impl Into<Child<'a>>) -> Self {
    self.children_mut().push(child.into());
    self
  }
}

impl<'a> Attributed<'a> for StartTag<'a> {
  fn start_tag_mut(&mut self) -> &mut StartTag<'a> {
    self
  }
}

impl<'a> Attributed<'a> for Void<'a> {
  fn start_tag_mut(&mut self) -> &mut StartTag<'a> {
    &mut self.start
  }
}

impl<'a> Attributed<'a> for Element<'a> {
  fn start_tag_mut(&mut self) -> &mut StartTag<'a> {
    &mut self.start
  }
}

impl<'a> Attributed<'a> for Prefixed<'a> {
  fn start_tag_mut(&mut self) -> &mut StartTag<'a> {
    &mut self.element.start
  }
}

impl<'a> Parent<'a> for Element<'a> {
  fn children_mut(&mut self) -> &mut Children<'a> {
    &mut self.children
  }
}

impl<'a> Parent<'a> for Prefixed<'a> {
  fn children_mut(&mut self) -> &mut Children<'a> {
    &mut self.element.children
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn attributes_keep_insertion_order() {
    let input = Void::new("input")
      .attr("type", "text")
      .flag("disabled")
      .attr("name", "q")
      .attr("type", "search");

    let names: Vec<&str> = input.start.attributes.keys().map(|x| x.as_ref()).collect();
    assert_eq!(names, vec!["type", "disabled", "name"]);
    assert_eq!(
      input.start.attributes.get("type"),
      Some(&Some(Cow::Borrowed("search")))
    );
    assert_eq!(input.start.attributes.get("disabled"), Some(&None));
  }

  #[test]
  fn child_appends_to_children() {
    let element = Element::new("p").children("First").child(Void::new("br")).child("Second");

    match &element.children {
      Children::List(children) => assert_eq!(children.len(), 3),
      other => panic!("unexpected children {:?}", other),
    }
  }

  #[test]
  fn prefixed_keeps_element() {
    let root = Element::new("html").attr("lang", "en").prefixed("<!DOCTYPE html>");
    assert_eq!(root.prefix, "<!DOCTYPE html>");
    assert_eq!(root.element.start.name, "html");
  }
}
