pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const VALUE_SEPARATOR: char = '=';
pub(crate) const NEGATION_PREFIX: &str = "no-";

/// The generated alias which inverts a boolean flag, ex: `verbose` -> `no-verbose`.
pub(crate) fn negated(name: &str) -> String {
    format!("{NEGATION_PREFIX}{name}")
}
