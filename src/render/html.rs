use crate::config::Config;
use crate::error::Error;
use crate::escape::write_escaped;
use crate::model::{Attributes, Child, Children, Class, Element, Node, Prefixed, StartTag, Void};
use std::borrow::Cow;
use std::fmt::Write;

pub fn render<W: Write>(node: &Node, writer: &mut W, config: &Config) -> Result<(), Error> {
  match node {
    Node::SelfClosing(void) => render_void(void, writer, config),
    Node::Element(element) => render_element(element, writer, config),
    Node::Prefixed(prefixed) => render_prefixed(prefixed, writer, config),
    Node::Raw(html) => Ok(writer.write_str(html)?),
    Node::Fragment(children) => render_children(children, writer, config),
  }
}

pub fn render_void<W: Write>(void: &Void, writer: &mut W, config: &Config) -> Result<(), Error> {
  render_start_tag(&void.start, writer, config)?;
  writer.write_str("/>")?;
  Ok(())
}

pub fn render_element<W: Write>(
  element: &Element,
  writer: &mut W,
  config: &Config,
) -> Result<(), Error> {
  render_start_tag(&element.start, writer, config)?;
  writer.write_char('>')?;
  render_children(&element.children, writer, config)?;
  write!(writer, "</{}>", element.start.name)?;
  Ok(())
}

pub fn render_prefixed<W: Write>(
  prefixed: &Prefixed,
  writer: &mut W,
  config: &Config,
) -> Result<(), Error> {
  writer.write_str(&prefixed.prefix)?;
  render_element(&prefixed.element, writer, config)
}

fn render_start_tag<W: Write>(start: &StartTag, writer: &mut W, config: &Config) -> Result<(), Error> {
  write!(writer, "<{}", start.name)?;
  render_class(&start.class, writer, config)?;
  render_attributes(&start.attributes, writer)
}

pub fn render_class<W: Write>(class: &Class, writer: &mut W, config: &Config) -> Result<(), Error> {
  let joined = match class {
    Class::Name(name) => Cow::Borrowed(name.as_ref()),
    Class::List(names) => names.join(" ").into(),
    Class::Lazy(once) => match once.take() {
      Some(names) => join(names).into(),
      None => return consumed("class list", config),
    },
  };

  if joined.is_empty() {
    return Ok(());
  }

  writer.write_str(" class=\"")?;
  if config.escape_class {
    write_escaped(writer, &joined)?;
  } else {
    writer.write_str(&joined)?;
  }
  writer.write_char('"')?;
  Ok(())
}

fn join<'a>(names: impl Iterator<Item = Cow<'a, str>>) -> String {
  let mut joined = String::new();

  for (index, name) in names.enumerate() {
    if index > 0 {
      joined.push(' ');
    }
    joined.push_str(&name);
  }

  joined
}

pub fn render_attributes<W: Write>(attributes: &Attributes, writer: &mut W) -> Result<(), Error> {
  for (name, value) in attributes {
    write!(writer, " {}", name)?;

    if let Some(value) = value {
      writer.write_str("=\"")?;
      write_escaped(writer, value)?;
      writer.write_char('"')?;
    }
  }

  Ok(())
}

pub fn render_children<W: Write>(
  children: &Children,
  writer: &mut W,
  config: &Config,
) -> Result<(), Error> {
  match children {
    Children::Node(node) => render(node, writer, config),
    Children::Text(text) => Ok(write_escaped(writer, text)?),
    Children::List(children) => {
      for child in children {
        render_child(child, writer, config)?;
      }
      Ok(())
    }
    Children::Lazy(once) => match once.take() {
      Some(children) => {
        for child in children {
          render_child(&child, writer, config)?;
        }
        Ok(())
      }
      None => consumed("children", config),
    },
  }
}

fn render_child<W: Write>(child: &Child, writer: &mut W, config: &Config) -> Result<(), Error> {
  match child {
    Child::Node(node) => render(node, writer, config),
    Child::Text(text) => Ok(write_escaped(writer, text)?),
    Child::Unsupported(kind) if config.strict => Err(Error::UnsupportedChild(*kind)),
    Child::Unsupported(kind) => {
      tracing::debug!(kind = *kind, "skipping unsupported child");
      Ok(())
    }
  }
}

fn consumed(what: &'static str, config: &Config) -> Result<(), Error> {
  if config.strict {
    return Err(Error::Consumed(what));
  }

  tracing::debug!(what, "one-shot producer already consumed, rendering nothing");
  Ok(())
}
