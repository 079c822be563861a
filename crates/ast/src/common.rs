use std::fmt::{Display, Formatter, Result};

/// Inclusive byte range into the source text.
pub type Span = std::ops::RangeInclusive<usize>;

#[derive(Debug, Clone)]
pub struct Spanned<T>(pub T, pub Span);

impl<T> Spanned<T> {
    pub fn start(&self) -> usize {
        *self.1.start()
    }

    pub fn end(&self) -> usize {
        *self.1.end()
    }

    /// Whether `next` begins right where `self` ends, with no whitespace between.
    pub fn touches<U>(&self, next: &Spanned<U>) -> bool {
        self.end() + 1 == next.start()
    }
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Display> Display for Spanned<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.fmt(f)
    }
}
