use crate::api::{Destination, Flag};
use crate::error::{FlagError, ParseErrors};
use crate::matcher::{Namespace, Scan, TokenScanner};
use crate::model::{Behaviors, ParseBehavior};
use crate::parser::{dispatch_all, AnonymousFlag, BoundFlag};

/// The registry of flags, and the entry point for parsing.
///
/// Flags are registered once, then the set may be parsed any number of times.
/// Each parse only writes onto destinations; it never changes the registered flags.
///
/// ### Example
/// ```
/// # use flagbind_builder as flagbind;
/// use flagbind::{Flag, FlagSet};
///
/// let mut verbose: bool = false;
/// let mut level: u8 = 0;
/// let mut flags = FlagSet::new();
/// Flag::bool("verbose", true).to(&mut flags, &mut verbose).unwrap();
/// Flag::u8("level", 1).required().to(&mut flags, &mut level).unwrap();
///
/// let remaining = flags.parse(&["--no-verbose", "-level", "3", "path"]).unwrap();
/// drop(flags);
///
/// assert_eq!(remaining, vec!["path"]);
/// assert!(!verbose);
/// assert_eq!(level, 3);
/// ```
pub struct FlagSet<'a> {
    // We need a (dyn .. [ignoring T] ..) here in order to put all the flags of varying types T under one collection.
    flags: Vec<Box<dyn AnonymousFlag + 'a>>,
    namespace: Namespace,
}

impl<'a> Default for FlagSet<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for FlagSet<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field(
                "flags",
                &self.flags.iter().map(|flag| flag.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> FlagSet<'a> {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self {
            flags: Vec::default(),
            namespace: Namespace::default(),
        }
    }

    /// Register a flag, delivering its value to `destination`.
    ///
    /// Fails with [`FlagError::DuplicateFlag`] if the flag's name or any of its aliases is already registered (as a name or alias).
    /// Fails with [`FlagError::InvalidName`] if the name or any alias is empty, starts with `-`, or contains `=`.
    /// In either case the flag set is left unchanged.
    ///
    /// See [`Flag::to`] and [`Flag::to_callback`] for the common forms of registration.
    pub fn register<T: Clone + 'a>(
        &mut self,
        flag: Flag<T>,
        destination: Destination<'a, T>,
    ) -> Result<(), FlagError> {
        self.namespace.insert(flag.name(), flag.aliases())?;
        self.flags.push(Box::new(BoundFlag::new(flag, destination)));
        Ok(())
    }

    /// Whether `name` is registered, either as a canonical name or an alias.
    pub fn contains(&self, name: &str) -> bool {
        self.namespace.resolve(name).is_some()
    }

    /// Resolve a canonical name or alias to its canonical name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.namespace.resolve(name)
    }

    /// Number of registered flags (aliases are not counted).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are registered.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Parse the tokens with the default behaviour (see [`FlagSet::parse_with`]).
    pub fn parse(&self, tokens: &[impl AsRef<str>]) -> Result<Vec<String>, ParseErrors> {
        self.parse_with(tokens, &[])
    }

    /// Parse the tokens, delivering a value to every registered flag's destination.
    ///
    /// Returns the remainder: the tokens which were not consumed as flags or flag values, in order.
    /// Unknown flag tokens are always part of the remainder.
    /// With [`ParseBehavior::ReadOnly`], the remainder is instead the unmodified input.
    ///
    /// Parsing does not stop at the first failure.
    /// Every registered flag is resolved, and all failures are reported together via [`ParseErrors`] (which also holds the remainder).
    /// A flag that fails leaves its destination untouched.
    ///
    /// ### Example
    /// ```
    /// # use flagbind_builder as flagbind;
    /// use flagbind::{ErrorKind, Flag, FlagSet, ParseBehavior};
    ///
    /// let mut count: u32 = 0;
    /// let mut flags = FlagSet::new();
    /// Flag::u32("count", 0).to(&mut flags, &mut count).unwrap();
    ///
    /// let tokens = ["--count=x", "--other"];
    /// let errors = flags
    ///     .parse_with(&tokens, &[ParseBehavior::Strict, ParseBehavior::ReadOnly])
    ///     .unwrap_err();
    ///
    /// assert_eq!(errors.len(), 2);
    /// assert!(errors.contains(ErrorKind::UnknownFlag));
    /// assert!(errors.contains(ErrorKind::InvalidValue));
    /// assert_eq!(errors.remaining(), tokens);
    /// ```
    pub fn parse_with(
        &self,
        tokens: &[impl AsRef<str>],
        behaviors: &[ParseBehavior],
    ) -> Result<Vec<String>, ParseErrors> {
        let behaviors = Behaviors::from(behaviors);
        let Scan {
            remaining,
            matches,
            unknown,
        } = TokenScanner::new(&self.namespace, behaviors).scan(tokens);
        let mut errors = Vec::default();

        if behaviors.strict {
            errors.extend(unknown.into_iter().map(FlagError::unknown));
        }

        errors.extend(dispatch_all(&self.flags, matches));

        if errors.is_empty() {
            Ok(remaining)
        } else {
            Err(ParseErrors::new(errors, remaining))
        }
    }
}
