use thiserror::Error;

/// The reason a flag value could not be delivered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// A raw token does not convert into the flag's type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The raw token taken from the input.
        token: String,
        /// The target type of the conversion.
        type_name: &'static str,
    },
    /// The destination rejected a parsed value.
    #[error("cannot bind value: {message}.")]
    InvalidBinding {
        /// The message reported by the destination.
        message: String,
    },
    /// The destination rejected the flag's default value.
    #[error("cannot apply default: {message}.")]
    InvalidDefault {
        /// The message reported by the destination.
        message: String,
    },
}

/// The classification of a [`FlagError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`FlagError::MissingFlag`].
    MissingFlag,
    /// See [`FlagError::UnknownFlag`].
    UnknownFlag,
    /// See [`FlagError::DuplicateFlag`].
    DuplicateFlag,
    /// See [`FlagError::InvalidValue`].
    InvalidValue,
    /// See [`FlagError::InvalidName`].
    InvalidName,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single failure, raised while registering or parsing a flag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlagError {
    /// A required flag is absent, or a flag was given no value where one is required.
    #[error("missing flag '{name}'.")]
    MissingFlag {
        /// The canonical name of the flag.
        name: String,
    },
    /// A flag token does not resolve to any registered flag (strict parsing only).
    #[error("unknown flag '{name}'.")]
    UnknownFlag {
        /// The name as written on the input, without leading dashes.
        name: String,
    },
    /// A name or alias collides during registration, or a single-valued flag was given multiple values.
    #[error("duplicate flag '{name}'.")]
    DuplicateFlag {
        /// The colliding name.
        name: String,
    },
    /// A value does not convert, or the destination rejected it.
    #[error("invalid value for flag '{name}': {reason}")]
    InvalidValue {
        /// The canonical name of the flag.
        name: String,
        /// Why the value was rejected.
        #[source]
        reason: InvalidCapture,
    },
    /// A name or alias can never be matched on the input: it is empty, starts with `-`, or contains `=`.
    #[error("invalid flag name '{name}'.")]
    InvalidName {
        /// The offending name.
        name: String,
    },
}

impl FlagError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        FlagError::MissingFlag { name: name.into() }
    }

    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        FlagError::UnknownFlag { name: name.into() }
    }

    pub(crate) fn duplicate(name: impl Into<String>) -> Self {
        FlagError::DuplicateFlag { name: name.into() }
    }

    pub(crate) fn invalid_name(name: impl Into<String>) -> Self {
        FlagError::InvalidName { name: name.into() }
    }

    /// Build an [`FlagError::InvalidValue`] for a token that does not convert to `T`.
    pub fn conversion<T>(name: impl Into<String>, token: impl Into<String>) -> Self {
        FlagError::InvalidValue {
            name: name.into(),
            reason: InvalidCapture::InvalidConversion {
                token: token.into(),
                type_name: std::any::type_name::<T>(),
            },
        }
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlagError::MissingFlag { .. } => ErrorKind::MissingFlag,
            FlagError::UnknownFlag { .. } => ErrorKind::UnknownFlag,
            FlagError::DuplicateFlag { .. } => ErrorKind::DuplicateFlag,
            FlagError::InvalidValue { .. } => ErrorKind::InvalidValue,
            FlagError::InvalidName { .. } => ErrorKind::InvalidName,
        }
    }

    /// The flag name this error refers to.
    pub fn name(&self) -> &str {
        match self {
            FlagError::MissingFlag { name }
            | FlagError::UnknownFlag { name }
            | FlagError::DuplicateFlag { name }
            | FlagError::InvalidValue { name, .. }
            | FlagError::InvalidName { name } => name,
        }
    }
}

/// Every failure encountered during one parse, along with the remainder that parse produced.
///
/// Parsing does not stop at the first failure; each registered flag is attempted and each failure is collected here.
/// Unknown flags are listed first (in input order), followed by flag failures in registration order.
///
/// ### Example
/// ```
/// # use flagbind_builder as flagbind;
/// use flagbind::{ErrorKind, Flag, FlagSet};
///
/// let mut count: u32 = 0;
/// let mut flags = FlagSet::new();
/// Flag::u32("count", 0).required().to(&mut flags, &mut count).unwrap();
///
/// let errors = flags.parse(&["file.txt"]).unwrap_err();
/// assert!(errors.contains(ErrorKind::MissingFlag));
/// assert_eq!(errors.remaining(), &["file.txt".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors {
    errors: Vec<FlagError>,
    remaining: Vec<String>,
}

impl ParseErrors {
    pub(crate) fn new(errors: Vec<FlagError>, remaining: Vec<String>) -> Self {
        Self { errors, remaining }
    }

    /// Iterate over the individual failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FlagError> {
        self.errors.iter()
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any failure is of the given kind.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|error| error.kind() == kind)
    }

    /// The remainder produced by the failed parse.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Take the remainder produced by the failed parse.
    pub fn into_remaining(self) -> Vec<String> {
        self.remaining
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}: {error}", i + 1)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl<'e> IntoIterator for &'e ParseErrors {
    type Item = &'e FlagError;
    type IntoIter = std::slice::Iter<'e, FlagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ParseErrors {
    type Item = FlagError;
    type IntoIter = std::vec::IntoIter<FlagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
