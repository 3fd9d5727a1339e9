use std::collections::{BTreeMap, HashMap};

/// The raw (unconverted) values gathered for one flag during a parse.
///
/// Each value is kept alongside the alias it was given under, in the order encountered on the input.
/// This allows a boolean flag to tell `--flag` apart from `--no-flag`, even though both resolve to the same flag.
/// A flag token without a value contributes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawValues {
    entries: Vec<(String, String)>,
}

impl RawValues {
    /// Record a raw value given under `alias`.
    pub fn push(&mut self, alias: impl Into<String>, value: impl Into<String>) {
        self.entries.push((alias.into(), value.into()));
    }

    /// Number of values, across all aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no values were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All values, merged across aliases, in encounter order.
    pub fn values(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, value)| value.as_str()).collect()
    }

    /// Each `(alias, value)` pair, in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, value)| (alias.as_str(), value.as_str()))
    }

    /// The values grouped by the alias they were given under.
    pub fn by_alias(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::default();

        for (alias, value) in self.iter() {
            grouped.entry(alias).or_default().push(value);
        }

        grouped
    }
}

impl<A: Into<String>, V: Into<String>> FromIterator<(A, V)> for RawValues {
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut raw_values = RawValues::default();

        for (alias, value) in iter {
            raw_values.push(alias, value);
        }

        raw_values
    }
}

/// The outcome of scanning the input tokens, before any conversion.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Tokens not consumed as flags or flag values.
    pub(crate) remaining: Vec<String>,
    /// Canonical flag name -> raw values.
    pub(crate) matches: HashMap<String, RawValues>,
    /// Names of flag tokens which did not resolve, in input order.
    pub(crate) unknown: Vec<String>,
}
