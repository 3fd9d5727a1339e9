pub(crate) mod api;
pub(crate) mod core;
mod model;

pub(crate) use self::api::Namespace;
pub(crate) use self::core::TokenScanner;
pub use model::RawValues;
pub(crate) use model::Scan;
