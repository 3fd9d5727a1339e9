//! Traits which, typically, may be imported without concern: `use flagbind::prelude::*`.
use crate::error::FlagError;
use crate::matcher::RawValues;

/// Behaviour to convert the raw values of a flag into its type `T`.
///
/// The values are merged across every alias of the flag, in encounter order.
/// A flag token given without a value contributes an empty string.
// Needs to be imported in order to implement a custom `Parser`.
pub trait Parser<T> {
    /// Convert the raw values of the flag `name`.
    fn parse(&self, name: &str, values: &[&str]) -> Result<T, FlagError>;
}

impl<T, F> Parser<T> for F
where
    F: Fn(&str, &[&str]) -> Result<T, FlagError>,
{
    fn parse(&self, name: &str, values: &[&str]) -> Result<T, FlagError> {
        self(name, values)
    }
}

/// Behaviour to convert the raw values of a flag into its type `T`, taking into account which alias each value was given under.
// Needs to be imported in order to implement a custom `AliasParser`.
pub trait AliasParser<T> {
    /// Convert the raw values of the flag `name`.
    fn parse(&self, name: &str, values: &RawValues) -> Result<T, FlagError>;
}
