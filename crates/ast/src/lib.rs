mod common;
mod query;
pub mod token;

pub use crate::{common::*, query::*};
