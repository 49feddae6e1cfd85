use crate::config::Config;
use crate::error::Error;
use crate::model::{Element, Node, Prefixed, Void};
use std::fmt;
use std::io;

pub mod html;

/// Serialization to HTML text.
///
/// Implementors only provide `render_to`; the buffered and streaming entry
/// points are derived from it.
pub trait Render {
  fn render_to<W: fmt::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error>;

  fn render(&self, config: &Config) -> Result<String, Error> {
    tracing::trace!(?config, "rendering to string");
    let mut output = String::new();
    self.render_to(&mut output, config)?;
    Ok(output)
  }

  /// Renders with the default, lenient configuration.
  fn to_html(&self) -> String {
    // The lenient config rejects nothing and writing into a String cannot fail.
    self.render(&Config::default()).unwrap_or_default()
  }

  /// Streams the rendered markup into `writer` as it is produced.
  fn write_html<W: io::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error> {
    tracing::trace!(?config, "rendering to writer");
    let mut adapter = IoWriter {
      inner: writer,
      error: None,
    };

    match self.render_to(&mut adapter, config) {
      Err(Error::Fmt(err)) => Err(adapter.error.take().map_or(Error::Fmt(err), Error::Io)),
      result => result,
    }
  }
}

struct IoWriter<'w, W> {
  inner: &'w mut W,
  error: Option<io::Error>,
}

impl<'w, W: io::Write> fmt::Write for IoWriter<'w, W> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.inner.write_all(s.as_bytes()).map_err(|err| {
      self.error = Some(err);
      fmt::Error
    })
  }
}

impl<'a> Render for Node<'a> {
  fn render_to<W: fmt::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error> {
    html::render(self, writer, config)
  }
}

impl<'a> Render for Void<'a> {
  fn render_to<W: fmt::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error> {
    html::render_void(self, writer, config)
  }
}

impl<'a> Render for Element<'a> {
  fn render_to<W: fmt::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error> {
    html::render_element(self, writer, config)
  }
}

impl<'a> Render for Prefixed<'a> {
  fn render_to<W: fmt::Write>(&self, writer: &mut W, config: &Config) -> Result<(), Error> {
    html::render_prefixed(self, writer, config)
  }
}

impl<'a> fmt::Display for Node<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.render_to(f, &Config::default()).map_err(|_| fmt::Error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Attributed, Children, Parent};
  use crate::tags::*;
  use pretty_assertions::assert_eq;
  use std::io::BufWriter;

  #[test]
  fn streams_into_io_writer() {
    let node: Node = p().children("Hi & bye").into();
    let mut writer = BufWriter::new(Vec::new());
    node.write_html(&mut writer, &Config::default()).unwrap();

    assert_eq!(
      std::str::from_utf8(writer.buffer()).unwrap(),
      "<p>Hi &amp; bye</p>"
    );
  }

  #[test]
  fn io_errors_surface_as_io() {
    struct Broken;

    impl io::Write for Broken {
      fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
      }

      fn flush(&mut self) -> io::Result<()> {
        Ok(())
      }
    }

    let result = br().write_html(&mut Broken, &Config::default());
    assert!(matches!(result, Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe));
  }

  #[test]
  fn display_matches_to_html() {
    let node: Node = div().class("box").children(vec![span().children("x")]).into();
    assert_eq!(node.to_string(), node.to_html());
    assert_eq!(format!("{}", node), r#"<div class="box"><span>x</span></div>"#);
  }

  #[test]
  fn strict_render_reports_errors() {
    let node = div().children(Children::from(vec![crate::model::Child::from(42)]));
    assert!(matches!(
      node.render(&Config::strict()),
      Err(Error::UnsupportedChild("i32"))
    ));
    assert_eq!(node.to_html(), "<div></div>");
  }

  #[test]
  fn every_node_kind_renders() {
    assert_eq!(hr().class("sep").to_html(), r#"<hr class="sep"/>"#);
    assert_eq!(html().to_html(), "<!DOCTYPE html><html></html>");
    assert_eq!(raw("<b>x</b>").to_html(), "<b>x</b>");
    assert_eq!(fragment(["a", "b"]).to_html(), "ab");
  }
}
