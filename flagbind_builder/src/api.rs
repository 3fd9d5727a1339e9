mod capture;
mod core;
mod field;
mod flag;

pub use self::core::*;
pub use capture::*;
pub use field::*;
pub use flag::*;
