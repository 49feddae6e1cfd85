//! One constructor per HTML element, generated from the tables below.
//!
//! Void elements produce a [`Void`], which has no children. Every other
//! element produces an [`Element`]. `html` is the exception: it returns the
//! document root, prefixed with the HTML5 doctype.

use crate::model::{Children, Element, Node, Prefixed, Void};
use std::borrow::Cow;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

macro_rules! void_elements {
  ($($name:ident),+ $(,)?) => {
    pub static VOID_ELEMENTS: &[&str] = &[$(stringify!($name)),+];

    $(
      #[doc = concat!("The `<", stringify!($name), "/>` void element.")]
      pub fn $name<'a>() -> Void<'a> {
        Void::new(stringify!($name))
      }
    )+
  };
}

macro_rules! elements {
  ($($name:ident),+ $(,)?) => {
    pub static ELEMENTS: &[&str] = &["html", $(stringify!($name)),+];

    $(
      #[doc = concat!("The `<", stringify!($name), ">` element.")]
      pub fn $name<'a>() -> Element<'a> {
        Element::new(stringify!($name))
      }
    )+
  };
}

void_elements!(
  area, base, br, col, embed, hr, img, input, link, meta, param, source, track, wbr,
);

elements!(
  a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button, canvas,
  caption, cite, code, colgroup, command, data, datalist, dd, del, details, dfn, dialog, div, dl,
  dt, em, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head, header, hgroup,
  i, iframe, ins, kbd, keygen, label, legend, li, main, map, mark, menu, meter, nav, noscript,
  object, ol, optgroup, option, output, p, picture, pre, progress, q, rp, rt, ruby, s, samp,
  script, section, select, slot, small, span, strong, style, sub, summary, sup, table, tbody, td,
  template, textarea, tfoot, th, thead, time, title, tr, u, ul, var, video,
);

/// The document root: `<html>` preceded by the doctype.
pub fn html<'a>() -> Prefixed<'a> {
  Element::new("html").prefixed(DOCTYPE)
}

pub fn is_void(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Markup inserted without escaping. Never pass untrusted input.
pub fn raw<'a>(html: impl Into<Cow<'a, str>>) -> Node<'a> {
  Node::raw(html)
}

/// Children rendered without an enclosing tag.
pub fn fragment<'a>(children: impl Into<Children<'a>>) -> Node<'a> {
  Node::fragment(children)
}
