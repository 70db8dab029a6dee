//! The pull-based result protocol shared by every top-k iterator.
//!
//! A cursor is positioned on its current result as soon as it is built.
//! Callers must check [`TopKCursor::done`] before every [`TopKCursor::get`]
//! and [`TopKCursor::advance`]; touching an exhausted cursor is a programming
//! error and panics instead of returning a sentinel.

/// A lazy, finite, non-restartable sequence of ranked results.
///
/// ```rust
/// use topk::cursor::TopKCursor;
///
/// struct Countdown(u64);
///
/// impl TopKCursor for Countdown {
///     type Item = u64;
///
///     fn done(&self) -> bool {
///         self.0 == 0
///     }
///
///     fn get(&self) -> u64 {
///         if self.done() {
///             topk::cursor::exhausted("Countdown");
///         }
///         self.0
///     }
///
///     fn advance(&mut self) {
///         if self.done() {
///             topk::cursor::exhausted("Countdown");
///         }
///         self.0 -= 1;
///     }
/// }
///
/// let all: Vec<u64> = Countdown(3).into_results().collect();
/// assert_eq!(all, vec![3, 2, 1]);
/// ```
pub trait TopKCursor {
    type Item;

    /// Returns true once every result has been produced.
    fn done(&self) -> bool;

    /// Returns the current result.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is done.
    fn get(&self) -> Self::Item;

    /// Moves to the next result, doing only the work needed to find it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is done.
    fn advance(&mut self);

    /// Adapts the cursor into a standard [`Iterator`].
    fn into_results(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

impl<C: TopKCursor + ?Sized> TopKCursor for Box<C> {
    type Item = C::Item;

    fn done(&self) -> bool {
        (**self).done()
    }

    fn get(&self) -> Self::Item {
        (**self).get()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// Iterator over the remaining results of a [`TopKCursor`].
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: TopKCursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.done() {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

/// Aborts the current operation because `cursor` was used after exhaustion.
#[cold]
#[track_caller]
pub fn exhausted(cursor: &str) -> ! {
    log::error!("{} accessed after exhaustion", cursor);
    panic!("{} is exhausted: check done() before get() or advance()", cursor)
}
