/// Builds an ordered attribute map.
///
/// Keys are identifiers or string literals; a key without `= value` is a
/// valueless attribute.
///
/// ```
/// use nate::attrs;
/// use nate::model::Attributes;
///
/// let attrs: Attributes = attrs!(charset = "utf-8", "http-equiv" = "refresh", hidden);
/// assert_eq!(attrs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
  (@key $key:ident) => {
    ::std::borrow::Cow::Borrowed(stringify!($key))
  };

  (@key $key:literal) => {
    ::std::borrow::Cow::from($key)
  };

  (@value) => {
    None
  };

  (@value $value:expr) => {
    Some(::std::borrow::Cow::from($value))
  };

  ($($key:tt $(= $value:expr)?),* $(,)?) => {
    <$crate::model::Attributes as ::std::iter::FromIterator<_>>::from_iter([
      $(($crate::attrs!(@key $key), $crate::attrs!(@value $($value)?)),)*
    ])
  };
}

/// Builds a child list from values of mixed types.
#[macro_export]
macro_rules! children {
  ($($child:expr),* $(,)?) => {
    $crate::model::Children::List(vec![$($crate::model::Child::from($child)),*])
  };
}
