use std::borrow::Cow;
use std::fmt::{self, Write};

fn entity(byte: u8) -> Option<&'static str> {
  match byte {
    b'&' => Some("&amp;"),
    b'<' => Some("&lt;"),
    b'>' => Some("&gt;"),
    b'"' => Some("&quot;"),
    b'\'' => Some("&#x27;"),
    _ => None,
  }
}

/// Writes `input` into `out`, replacing the five HTML-significant characters
/// with character references. Everything else, including non-ASCII text, is
/// copied unchanged.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, input: &str) -> fmt::Result {
  let mut last = 0;

  for (pos, byte) in input.bytes().enumerate() {
    if let Some(replacement) = entity(byte) {
      out.write_str(&input[last..pos])?;
      out.write_str(replacement)?;
      last = pos + 1;
    }
  }

  out.write_str(&input[last..])
}

/// Escapes text content and attribute values. Borrows the input when there is
/// nothing to replace.
pub fn escape(input: &str) -> Cow<'_, str> {
  if !input.bytes().any(|byte| entity(byte).is_some()) {
    return Cow::Borrowed(input);
  }

  let mut output = String::with_capacity(input.len() + 16);
  // Writing into a String is infallible.
  let _ = write_escaped(&mut output, input);
  Cow::Owned(output)
}

/// Reverses `escape`, for checking output in tests.
#[cfg(test)]
pub(crate) fn unescape(input: &str) -> String {
  input
    .replace("&quot;", "\"")
    .replace("&#x27;", "'")
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&amp;", "&")
}

/// Every `&` in escaped output starts one of the five references.
#[cfg(test)]
pub(crate) fn only_entities(escaped: &str) -> bool {
  !escaped.contains(['<', '>', '"', '\''])
    && escaped.match_indices('&').all(|(pos, _)| {
      ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"]
        .iter()
        .any(|entity| escaped[pos..].starts_with(entity))
    })
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use proptest::prelude::*;
  use rstest::rstest;

  #[rstest]
  #[case("plain text", "plain text")]
  #[case("Hi & bye", "Hi &amp; bye")]
  #[case("<b>x</b>", "&lt;b&gt;x&lt;/b&gt;")]
  #[case(r#"say "hi""#, "say &quot;hi&quot;")]
  #[case("whale's tale", "whale&#x27;s tale")]
  #[case(
    "<script>alert('XSS');</script>",
    "&lt;script&gt;alert(&#x27;XSS&#x27;);&lt;/script&gt;"
  )]
  #[case("von Weizsäcker → ü", "von Weizsäcker → ü")]
  #[case("&amp;", "&amp;amp;")]
  #[case("", "")]
  fn escapes_significant_characters(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape(input), expected);
  }

  #[test]
  fn borrows_when_nothing_to_escape() {
    assert!(matches!(escape("nothing here"), Cow::Borrowed(_)));
    assert!(matches!(escape("a < b"), Cow::Owned(_)));
  }

  #[test]
  fn streams_into_sink() {
    let mut out = String::from("<p>");
    write_escaped(&mut out, "1 < 2 & 3 > 2").unwrap();
    assert_eq!(out, "<p>1 &lt; 2 &amp; 3 &gt; 2");
  }

  proptest! {
    #[test]
    fn escaped_text_round_trips(input in any::<String>()) {
      let escaped = escape(&input);
      prop_assert!(only_entities(&escaped));
      prop_assert_eq!(unescape(&escaped), input.clone());
    }

    #[test]
    fn streamed_and_buffered_agree(input in "[a-z<>&\"' ]{0,40}") {
      let mut streamed = String::new();
      write_escaped(&mut streamed, &input).unwrap();
      prop_assert_eq!(streamed, escape(&input).into_owned());
    }
  }
}
