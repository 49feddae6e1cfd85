use crate::model::Node;
use pulldown_cmark::{html, Options, Parser};

/// Renders markdown into a raw markup node.
///
/// Text in the source is escaped by the markdown renderer. Inline HTML in the
/// source is passed through unchanged, so only feed it trusted markdown.
pub fn markdown(input: &str) -> Node<'static> {
  let mut opts = Options::empty();
  opts.insert(Options::ENABLE_TABLES);
  opts.insert(Options::ENABLE_STRIKETHROUGH);

  let mut output = String::with_capacity(input.len() * 3 / 2);
  html::push_html(&mut output, Parser::new_ext(input, opts));
  Node::Raw(output.into())
}
