use crate::api::capture::{BoolParser, BoolSliceParser, ScalarParser, SliceParser};
use crate::api::{Destination, FlagSet};
use crate::constant::negated;
use crate::error::FlagError;
use crate::matcher::RawValues;
use crate::prelude::{AliasParser, Parser};

/// The conversion strategy of a flag.
///
/// A flag has precisely one: either its values are merged across aliases ([`Capture::Scalar`]), or they are kept grouped by alias ([`Capture::Alias`]).
pub enum Capture<T> {
    /// Convert the merged raw values.
    Scalar(Box<dyn Parser<T>>),
    /// Convert the raw values with knowledge of the alias each was given under.
    Alias(Box<dyn AliasParser<T>>),
}

impl<T> Capture<T> {
    pub(crate) fn parse(&self, name: &str, values: &RawValues) -> Result<T, FlagError> {
        match self {
            Capture::Scalar(parser) => parser.parse(name, &values.values()),
            Capture::Alias(parser) => parser.parse(name, values),
        }
    }
}

impl<T> std::fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match self {
            Capture::Scalar(_) => "Scalar",
            Capture::Alias(_) => "Alias",
        };

        write!(f, "{class}[{t}]", t = std::any::type_name::<T>())
    }
}

/// The declaration of a named, typed flag.
///
/// Flags are optional by default: when absent from the input, the default value is delivered to the destination.
/// Use [`Flag::required`] to instead report absence as [`FlagError::MissingFlag`].
///
/// ### Example
/// ```
/// # use flagbind_builder as flagbind;
/// use flagbind::{Flag, FlagSet};
///
/// let mut name: String = String::default();
/// let mut retries: u8 = 0;
/// let mut flags = FlagSet::new();
/// Flag::string("name", "world").to(&mut flags, &mut name).unwrap();
/// Flag::u8("retries", 3).alias("r").to(&mut flags, &mut retries).unwrap();
///
/// let remaining = flags.parse(&["-r=5", "input.txt"]).unwrap();
/// drop(flags);
///
/// assert_eq!(remaining, vec!["input.txt"]);
/// assert_eq!(name, "world");
/// assert_eq!(retries, 5);
/// ```
pub struct Flag<T> {
    name: String,
    aliases: Vec<String>,
    default: T,
    optional: bool,
    capture: Capture<T>,
}

impl<T> Flag<T> {
    /// Declare a flag which converts its values via `parser`.
    ///
    /// ### Example
    /// ```
    /// # use flagbind_builder as flagbind;
    /// use flagbind::{Flag, FlagError, FlagSet};
    ///
    /// let mut total: usize = 0;
    /// let mut flags = FlagSet::new();
    /// Flag::with_parser("length", 0, |_name: &str, values: &[&str]| -> Result<usize, FlagError> {
    ///     Ok(values.iter().map(|v| v.len()).sum())
    /// })
    /// .to(&mut flags, &mut total)
    /// .unwrap();
    ///
    /// flags.parse(&["--length=abc", "--length", "de"]).unwrap();
    /// drop(flags);
    /// assert_eq!(total, 5);
    /// ```
    pub fn with_parser(
        name: impl Into<String>,
        default: T,
        parser: impl Parser<T> + 'static,
    ) -> Self {
        Self::new(name.into(), default, Capture::Scalar(Box::new(parser)))
    }

    /// Declare a flag which converts its values via the alias-aware `parser`.
    ///
    /// No aliases are generated; add them via [`Flag::alias`].
    pub fn with_alias_parser(
        name: impl Into<String>,
        default: T,
        parser: impl AliasParser<T> + 'static,
    ) -> Self {
        Self::new(name.into(), default, Capture::Alias(Box::new(parser)))
    }

    fn new(name: String, default: T, capture: Capture<T>) -> Self {
        Self {
            name,
            aliases: Vec::default(),
            default,
            optional: true,
            capture,
        }
    }

    /// Make this flag required.
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    /// Add an alternate name for this flag.
    /// Aliases share a namespace with every other flag name and alias in the [`FlagSet`].
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The aliases, including any generated by the constructor.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The default value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Whether the flag may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn capture(&self) -> &Capture<T> {
        &self.capture
    }
}

impl<T: Clone> Flag<T> {
    /// Register this flag onto `flags`, delivering its value into `variable`.
    ///
    /// Fails with [`FlagError::DuplicateFlag`] if the name or any alias is already taken, or [`FlagError::InvalidName`] if one can never be matched.
    /// `flags` is then left unchanged.
    pub fn to<'a>(self, flags: &mut FlagSet<'a>, variable: &'a mut T) -> Result<(), FlagError>
    where
        T: 'a,
    {
        flags.register(self, Destination::variable(variable))
    }

    /// Register this flag onto `flags`, delivering its value to `callback`.
    ///
    /// ### Example
    /// ```
    /// # use flagbind_builder as flagbind;
    /// use flagbind::{ErrorKind, Flag, FlagSet};
    ///
    /// let mut flags = FlagSet::new();
    /// Flag::i64("offset", 0)
    ///     .to_callback(&mut flags, |offset| {
    ///         if offset < 0 {
    ///             Err("offset must not be negative")
    ///         } else {
    ///             Ok(())
    ///         }
    ///     })
    ///     .unwrap();
    ///
    /// let errors = flags.parse(&["--offset=-1"]).unwrap_err();
    /// assert!(errors.contains(ErrorKind::InvalidValue));
    /// ```
    pub fn to_callback<'a, E: std::fmt::Display>(
        self,
        flags: &mut FlagSet<'a>,
        callback: impl FnMut(T) -> Result<(), E> + 'a,
    ) -> Result<(), FlagError>
    where
        T: 'a,
    {
        flags.register(self, Destination::callback(callback))
    }

    /// Register this flag onto `flags`, delivering its value into `variable`.
    ///
    /// # Panics
    /// If the name or any alias is already taken or invalid.
    /// Use [`Flag::to`] to handle this case as a `Result`.
    pub fn to_unchecked<'a>(self, flags: &mut FlagSet<'a>, variable: &'a mut T)
    where
        T: 'a,
    {
        if let Err(error) = self.to(flags, variable) {
            panic!("invalid flag registration: {error}");
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.capture {
            Capture::Scalar(_) => "Scalar",
            Capture::Alias(_) => "Alias",
        };
        let aliases = if self.aliases.is_empty() {
            "".to_string()
        } else {
            format!(" ({a})", a = self.aliases.join(", "))
        };
        let requirement = if self.optional {
            format!("default={d:?}", d = self.default)
        } else {
            "required".to_string()
        };

        write!(
            f,
            "{class}[{t}, --{name}{aliases}, {requirement}]",
            t = std::any::type_name::<T>(),
            name = self.name,
        )
    }
}

// One scalar and one slice constructor for each type parsed via `FromStr`.
macro_rules! flag_constructors {
    ($($scalar:ident, $slice:ident => $t:ty;)*) => {
        $(
            impl Flag<$t> {
                #[doc = concat!("Declare a `", stringify!($t), "` flag.")]
                pub fn $scalar(name: impl Into<String>, default: $t) -> Self {
                    Self::with_parser(name, default, ScalarParser::<$t>::default())
                }
            }

            impl Flag<Vec<$t>> {
                #[doc = concat!("Declare a multi-valued `", stringify!($t), "` flag.")]
                #[doc = ""]
                #[doc = "Each occurrence of the flag contributes one value, in input order."]
                pub fn $slice(name: impl Into<String>, default: Vec<$t>) -> Self {
                    Self::with_parser(name, default, SliceParser::<$t>::default())
                }
            }
        )*
    };
}

flag_constructors! {
    isize, isize_slice => isize;
    i8, i8_slice => i8;
    i16, i16_slice => i16;
    i32, i32_slice => i32;
    i64, i64_slice => i64;
    usize, usize_slice => usize;
    u8, u8_slice => u8;
    u16, u16_slice => u16;
    u32, u32_slice => u32;
    u64, u64_slice => u64;
    f32, f32_slice => f32;
    f64, f64_slice => f64;
}

impl Flag<String> {
    /// Declare a `String` flag.
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::with_parser(name, default.into(), ScalarParser::<String>::default())
    }
}

impl Flag<Vec<String>> {
    /// Declare a multi-valued `String` flag.
    ///
    /// Each occurrence of the flag contributes one value, in input order.
    pub fn string_slice(name: impl Into<String>, default: Vec<String>) -> Self {
        Self::with_parser(name, default, SliceParser::<String>::default())
    }
}

impl Flag<bool> {
    /// Declare a `bool` flag.
    ///
    /// This also declares the alias `no-NAME`, which inverts the meaning of the flag (see [`BoolParser`]).
    pub fn bool(name: impl Into<String>, default: bool) -> Self {
        let name = name.into();
        let negation = negated(&name);
        Self::with_alias_parser(name, default, BoolParser).alias(negation)
    }
}

impl Flag<Vec<bool>> {
    /// Declare a multi-valued `bool` flag.
    ///
    /// This also declares the alias `no-NAME`, which inverts the meaning of each occurrence (see [`BoolSliceParser`]).
    pub fn bool_slice(name: impl Into<String>, default: Vec<bool>) -> Self {
        let name = name.into();
        let negation = negated(&name);
        Self::with_alias_parser(name, default, BoolSliceParser).alias(negation)
    }
}
