//! Trees described as JSON.
//!
//! A JSON string is a text child. An object with a `tag` is an element, an
//! object with `raw` is unescaped markup and an object with `fragment` is a
//! fragment. Any other value is an unsupported child.
//!
//! ```json
//! {"tag": "p", "class": ["lead"], "attributes": {"id": "intro"}, "children": ["Hi & bye"]}
//! ```

use crate::error::Error;
use crate::model::{Child, Children, Class, Element, Node, StartTag, Void};
use crate::tags::{is_void, DOCTYPE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "Value")]
pub enum Item {
  Text(String),
  Element(ElementItem),
  Raw { raw: String },
  Fragment { fragment: Items },
  Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementItem {
  pub tag: String,
  #[serde(default, skip_serializing_if = "ClassItem::is_empty")]
  pub class: ClassItem,
  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub attributes: IndexMap<String, Option<String>>,
  #[serde(default, skip_serializing_if = "Items::is_empty")]
  pub children: Items,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassItem {
  Name(String),
  List(Vec<String>),
}

/// A single item or a list of items. `null` means no items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Items(pub Vec<Item>);

impl ClassItem {
  pub fn is_empty(&self) -> bool {
    match self {
      ClassItem::Name(name) => name.is_empty(),
      ClassItem::List(names) => names.is_empty(),
    }
  }
}

impl Default for ClassItem {
  fn default() -> Self {
    ClassItem::List(Vec::new())
  }
}

impl Items {
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

impl TryFrom<Value> for Item {
  type Error = String;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    let mut object = match value {
      Value::String(text) => return Ok(Item::Text(text)),
      Value::Object(object) => object,
      other => return Ok(Item::Other(other)),
    };

    if object.contains_key("tag") {
      return serde_json::from_value(Value::Object(object))
        .map(Item::Element)
        .map_err(|err| err.to_string());
    }

    if let Some(raw) = object.remove("raw") {
      return match raw {
        Value::String(raw) => Ok(Item::Raw { raw }),
        other => Err(format!("`raw` must be a string, found {}", kind(&other))),
      };
    }

    if let Some(fragment) = object.remove("fragment") {
      return Items::try_from(fragment).map(|fragment| Item::Fragment { fragment });
    }

    Ok(Item::Other(Value::Object(object)))
  }
}

impl TryFrom<Value> for Items {
  type Error = String;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    match value {
      Value::Null => Ok(Items::default()),
      Value::Array(values) => values
        .into_iter()
        .map(Item::try_from)
        .collect::<Result<_, _>>()
        .map(Items),
      value => Ok(Items(vec![Item::try_from(value)?])),
    }
  }
}

fn into_child(item: Item) -> Child<'static> {
  match item {
    Item::Text(text) => Child::Text(text.into()),
    Item::Other(value) => Child::Unsupported(kind(&value)),
    item => Child::Node(item.into()),
  }
}

impl From<Items> for Children<'static> {
  fn from(items: Items) -> Children<'static> {
    Children::List(items.0.into_iter().map(into_child).collect())
  }
}

impl From<ClassItem> for Class<'static> {
  fn from(class: ClassItem) -> Class<'static> {
    match class {
      ClassItem::Name(name) => name.into(),
      ClassItem::List(names) => names.into(),
    }
  }
}

impl From<ElementItem> for Node<'static> {
  fn from(item: ElementItem) -> Node<'static> {
    let start = StartTag {
      name: item.tag.into(),
      class: item.class.into(),
      attributes: item
        .attributes
        .into_iter()
        .map(|(name, value)| (Cow::from(name), value.map(Cow::from)))
        .collect(),
    };

    if is_void(&start.name) {
      if !item.children.is_empty() {
        tracing::debug!(tag = %start.name, "dropping children of void element");
      }
      return Void::from(start).into();
    }

    let element = Element {
      start,
      children: item.children.into(),
    };

    if element.start.name == "html" {
      element.prefixed(DOCTYPE).into()
    } else {
      element.into()
    }
  }
}

impl From<Item> for Node<'static> {
  fn from(item: Item) -> Node<'static> {
    match item {
      Item::Text(text) => Node::Fragment(Children::Text(text.into())),
      Item::Element(element) => element.into(),
      Item::Raw { raw } => Node::Raw(raw.into()),
      Item::Fragment { fragment } => Node::Fragment(fragment.into()),
      Item::Other(value) => Node::Fragment(Children::List(vec![Child::Unsupported(kind(&value))])),
    }
  }
}

/// Builds a tree from an already deserialized description.
pub fn from_item(item: Item) -> Node<'static> {
  item.into()
}

/// Parses a JSON description into a tree.
pub fn from_json(input: &str) -> Result<Node<'static>, Error> {
  let item: Item = serde_json::from_str(input)?;
  Ok(from_item(item))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;
  use crate::render::Render;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  #[test]
  fn minimal_document_from_json() {
    let node = from_json(
      r#"{
        "tag": "html",
        "children": [
          {"tag": "head", "children": {"tag": "meta", "attributes": {"charset": "utf-8"}}},
          {"tag": "body", "children": [{"tag": "p", "children": "Hi & bye"}]}
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(
      node.to_html(),
      r#"<!DOCTYPE html><html><head><meta charset="utf-8"/></head><body><p>Hi &amp; bye</p></body></html>"#
    );
  }

  #[test]
  fn attributes_keep_document_order() {
    let node = from_json(
      r#"{"tag": "input", "class": "field", "attributes": {"type": "text", "required": null, "name": "q"}}"#,
    )
    .unwrap();

    assert_eq!(
      node.to_html(),
      r#"<input class="field" type="text" required name="q"/>"#
    );
  }

  #[test]
  fn raw_fragments_and_text() {
    let node = from_json(
      r#"{"fragment": ["<b>", {"raw": "<b>bold</b>"}, {"tag": "br", "children": ["dropped"]}]}"#,
    )
    .unwrap();

    assert_eq!(node.to_html(), "&lt;b&gt;<b>bold</b><br/>");
  }

  #[test]
  fn other_values_are_unsupported_children() {
    let node = from_json(r#"{"tag": "div", "children": [{"tag": "p"}, "text", 42, [1], null]}"#).unwrap();

    assert_eq!(node.to_html(), "<div><p></p>text</div>");
    assert!(matches!(
      node.render(&Config::strict()),
      Err(Error::UnsupportedChild("number"))
    ));
  }

  #[test]
  fn null_children_mean_no_children() {
    let node = from_json(r#"{"tag": "p", "children": null}"#).unwrap();
    assert_eq!(node.render(&Config::strict()).unwrap(), "<p></p>");

    let node = from_json(r#"{"fragment": null}"#).unwrap();
    assert_eq!(node.render(&Config::strict()).unwrap(), "");
  }

  #[test]
  fn attribute_order_survives_item_values() {
    let value = json!({"tag": "a", "attributes": {"z": "1", "href": "/", "a": null}});
    let item: Item = serde_json::from_value(value).unwrap();

    assert_eq!(
      from_item(item).to_html(),
      r#"<a z="1" href="/" a></a>"#
    );
  }

  #[test]
  fn malformed_elements_are_rejected() {
    let err = from_json(r#"{"tag": "img", "attributes": {"width": 100}}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));

    let err = from_json(r#"{"div": {"children": [{"raw": 1}]}, "fragment": [{"raw": 1}]}"#).unwrap_err();
    assert!(err.to_string().contains("`raw` must be a string"));
  }

  #[test]
  fn items_serialize_back_to_json() {
    let item = Item::Element(ElementItem {
      tag: "p".into(),
      class: ClassItem::List(vec!["lead".into()]),
      attributes: IndexMap::new(),
      children: Items(vec![Item::Text("Hi".into()), Item::Raw { raw: "<br/>".into() }]),
    });

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
      value,
      json!({"tag": "p", "class": ["lead"], "children": ["Hi", {"raw": "<br/>"}]})
    );

    let parsed: Item = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, item);
  }
}
