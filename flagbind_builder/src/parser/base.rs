use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::{Destination, Flag};
use crate::error::{FlagError, InvalidCapture};
use crate::matcher::RawValues;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour to resolve a flag without knowledge of its type T.
///
/// We use this at the top of the flag set object graph so that flags of different types may all be held in a single flag set.
pub(crate) trait AnonymousFlag {
    /// The canonical name.
    fn name(&self) -> &str;

    /// Whether the flag may be absent.
    fn is_optional(&self) -> bool;

    /// Deliver the default value to the destination.
    fn apply_default(&self) -> Result<(), FlagError>;

    /// Convert the raw values and deliver the result to the destination.
    fn dispatch(&self, values: &RawValues) -> Result<(), FlagError>;
}

/// A flag together with its destination.
pub(crate) struct BoundFlag<'a, T> {
    flag: Flag<T>,
    // Parsing only borrows the flag set, but must still write onto the destination.
    destination: RefCell<Destination<'a, T>>,
}

impl<'a, T> BoundFlag<'a, T> {
    pub(crate) fn new(flag: Flag<T>, destination: Destination<'a, T>) -> Self {
        Self {
            flag,
            destination: RefCell::new(destination),
        }
    }
}

impl<'a, T: Clone> AnonymousFlag for BoundFlag<'a, T> {
    fn name(&self) -> &str {
        self.flag.name()
    }

    fn is_optional(&self) -> bool {
        self.flag.is_optional()
    }

    fn apply_default(&self) -> Result<(), FlagError> {
        self.destination
            .borrow_mut()
            .accept(self.flag.default_value().clone())
            .map_err(|message| FlagError::InvalidValue {
                name: self.name().to_string(),
                reason: InvalidCapture::InvalidDefault { message },
            })
    }

    fn dispatch(&self, values: &RawValues) -> Result<(), FlagError> {
        let value = self.flag.capture().parse(self.name(), values)?;
        self.destination
            .borrow_mut()
            .accept(value)
            .map_err(|message| FlagError::InvalidValue {
                name: self.name().to_string(),
                reason: InvalidCapture::InvalidBinding { message },
            })
    }
}

/// Resolve every flag against the scanned raw values, collecting every failure.
///
/// Each flag is resolved independently; a failure never prevents the remaining flags from being resolved.
pub(crate) fn dispatch_all<'a>(
    flags: &[Box<dyn AnonymousFlag + 'a>],
    mut matches: HashMap<String, RawValues>,
) -> Vec<FlagError> {
    let mut errors = Vec::default();

    for flag in flags {
        let result = match matches.remove(flag.name()) {
            Some(values) => flag.dispatch(&values),
            None if flag.is_optional() => flag.apply_default(),
            None => Err(FlagError::missing(flag.name())),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Flag '{}' resolved: {:?}.", flag.name(), result);
        }

        if let Err(error) = result {
            errors.push(error);
        }
    }

    errors
}
