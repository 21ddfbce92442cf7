//! Iterator adapters shared by the tokenizer and the parsers.

use std::iter::Peekable;

/// A [`Peekable`] that also remembers the last item it yielded.
///
/// The parsers use the cached item to report a position when the input ends
/// unexpectedly.
pub(crate) struct CachedPeekable<I: Iterator> {
    iter: Peekable<I>,
    current: Option<I::Item>,
}

pub(crate) trait CachedPeekableable: Iterator + Sized {
    fn cached_peekable(self) -> CachedPeekable<Self>;
}

impl<I> CachedPeekableable for I
where
    I: Iterator,
{
    fn cached_peekable(self) -> CachedPeekable<Self> {
        CachedPeekable {
            iter: self.peekable(),
            current: None,
        }
    }
}

impl<I> CachedPeekable<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Returns a reference to the next item without advancing.
    pub(crate) fn peek(&mut self) -> Option<&I::Item> {
        self.iter.peek()
    }

    /// Returns the item most recently returned by [`Iterator::next`].
    pub(crate) fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Consumes the next item only when `predicate` holds for it.
    pub(crate) fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        let item = self.iter.next_if(predicate)?;
        self.current = Some(item.clone());
        Some(item)
    }
}

impl<I> Iterator for CachedPeekable<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.current = Some(item.clone());
        Some(item)
    }
}
