use std::cell::RefCell;
use std::fmt;

type Producer<'a, T> = Box<dyn Iterator<Item = T> + Send + 'a>;

/// A one-shot producer of values, consumed by the first render that reaches
/// it.
///
/// Rendering a tree twice renders a consumed producer as empty. `Once` is
/// `Send` but not `Sync`, so a tree holding one can move between threads but
/// cannot be rendered from two threads at the same time.
pub struct Once<'a, T>(RefCell<Option<Producer<'a, T>>>);

impl<'a, T> Once<'a, T> {
  pub fn new<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'a,
  {
    Once(RefCell::new(Some(Box::new(iter.into_iter()))))
  }

  /// Takes the producer out, leaving `None` behind for every later caller.
  pub fn take(&self) -> Option<Producer<'a, T>> {
    self.0.borrow_mut().take()
  }

  pub fn is_consumed(&self) -> bool {
    self.0.borrow().is_none()
  }

  /// Appends `value` after everything the producer still has to yield. A
  /// consumed producer stays consumed and `value` is dropped.
  pub(crate) fn chain(self, value: T) -> Self
  where
    T: Send + 'a,
  {
    match self.0.into_inner() {
      Some(rest) => Once::new(rest.chain(std::iter::once(value))),
      None => Once(RefCell::new(None)),
    }
  }
}

impl<'a, T> fmt::Debug for Once<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Once")
      .field("consumed", &self.is_consumed())
      .finish()
  }
}
