//! Build HTML5 trees in memory and serialize them to strings.
//!
//! Text children and attribute values are escaped on render; [`tags::raw`] is
//! the only way to emit markup verbatim.
//!
//! ```
//! use nate::tags::*;
//! use nate::{Attributed, Parent, Render};
//!
//! let doc = html().children([
//!   head().children(meta().attr("charset", "utf-8")),
//!   body().children(p().children("Hi & bye")),
//! ]);
//!
//! assert_eq!(
//!   doc.to_html(),
//!   r#"<!DOCTYPE html><html><head><meta charset="utf-8"/></head><body><p>Hi &amp; bye</p></body></html>"#
//! );
//! ```

#[macro_use]
extern crate pest_derive;
extern crate pest;

#[macro_use]
pub mod macros;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod markdown;
pub mod model;
pub mod render;
pub mod tag;
pub mod tags;

pub use config::Config;
pub use error::Error;
pub use escape::escape;
pub use markdown::markdown;
pub use model::{Attributed, Attributes, Child, Children, Class, Element, Node, Parent, Prefixed, StartTag, Void};
pub use render::Render;
