mod multi_peekable;

pub use multi_peekable::{MultiPeek, MultiPeekable};
