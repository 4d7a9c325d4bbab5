//! nattr Populate
//!
//! Build a fully nested tree whose branches are the Cartesian product of
//! ordered key layers, every leaf holding its own copy of one value.

mod error;
mod product;

pub use error::{PopulateError, PopulateResult};
pub use product::{populate_product, product_paths};
