//! Builder module for `flagbind`.
//! See [documentation root](https://docs.rs/flagbind/latest/flagbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use error::*;
pub use matcher::RawValues;
pub use model::ParseBehavior;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
