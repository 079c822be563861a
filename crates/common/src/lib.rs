pub mod iter;
mod macros;
