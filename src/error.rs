use crate::tag::Rule;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unsupported child of type `{0}`")]
  UnsupportedChild(&'static str),

  #[error("one-shot {0} was already consumed by an earlier render")]
  Consumed(&'static str),

  #[error("invalid tag shorthand: {0}")]
  Shorthand(#[from] Box<pest::error::Error<Rule>>),

  #[error("invalid document: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error("formatter error")]
  Fmt(#[from] std::fmt::Error),
}
