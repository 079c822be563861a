//! An iterator adapter that can look any number of items ahead.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    /// Returns the item `n` positions ahead without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        while self.buf.len() <= n {
            self.buf.push_back(self.iter.next()?);
        }

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if func(self.peek()?) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the next `n` items only if every one of them satisfies `func`,
    /// which receives each item together with its offset from the cursor.
    /// Returns the last consumed item.
    pub fn advance_n_if_each(
        &mut self,
        n: usize,
        func: impl Fn((usize, &I::Item)) -> bool,
    ) -> Option<I::Item> {
        if n == 0 {
            return None;
        }

        for i in 0..n {
            match self.peek_nth(i) {
                Some(item) if func((i, item)) => {}
                _ => return None,
            }
        }

        self.buf.drain(..n).last()
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        (
            low.saturating_add(self.buf.len()),
            high.and_then(|high| high.checked_add(self.buf.len())),
        )
    }
}
