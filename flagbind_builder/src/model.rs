/// A toggle that changes how a single parse treats its input tokens.
///
/// Behaviours are independent and may be combined.
/// With no behaviours, unknown flags pass through silently and the remainder is built from the unconsumed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseBehavior {
    /// Report unknown flag tokens as [`FlagError::UnknownFlag`](crate::FlagError::UnknownFlag).
    /// The token is still passed through to the remainder.
    Strict,
    /// Return the original input as the remainder, regardless of what was consumed.
    /// Destinations are still written.
    ReadOnly,
}

impl std::fmt::Display for ParseBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Behaviors {
    pub(crate) strict: bool,
    pub(crate) read_only: bool,
}

impl From<&[ParseBehavior]> for Behaviors {
    fn from(value: &[ParseBehavior]) -> Self {
        let mut behaviors = Behaviors::default();

        for behavior in value {
            match behavior {
                ParseBehavior::Strict => behaviors.strict = true,
                ParseBehavior::ReadOnly => behaviors.read_only = true,
            }
        }

        behaviors
    }
}
