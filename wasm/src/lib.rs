use nate::document::{self, Item};
use nate::{Config, Render};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
  js_sys::Error::new(&err.to_string()).into()
}

fn config(strict: bool) -> Config {
  Config {
    strict,
    ..Config::default()
  }
}

/// Renders a JSON tree description to HTML.
#[wasm_bindgen]
pub fn render(input: &str, strict: bool) -> Result<String, JsValue> {
  let node = document::from_json(input).map_err(to_js)?;
  node.render(&config(strict)).map_err(to_js)
}

/// Renders a tree description given as a JavaScript value.
#[wasm_bindgen(js_name = renderValue)]
pub fn render_value(value: JsValue, strict: bool) -> Result<String, JsValue> {
  let item: Item = serde_wasm_bindgen::from_value(value)?;
  document::from_item(item).render(&config(strict)).map_err(to_js)
}
