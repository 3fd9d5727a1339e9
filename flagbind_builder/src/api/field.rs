/// Where a flag's parsed (or default) value is delivered.
///
/// A destination receives at most one value per parse.
/// It receives nothing when the flag fails to parse.
pub enum Destination<'a, T> {
    /// Assign the value onto a variable.
    Variable(&'a mut T),
    /// Hand the value to a function, which may reject it.
    Callback(Box<dyn FnMut(T) -> Result<(), String> + 'a>),
}

impl<'a, T> Destination<'a, T> {
    /// Create a destination which assigns onto `variable`.
    pub fn variable(variable: &'a mut T) -> Self {
        Destination::Variable(variable)
    }

    /// Create a destination which invokes `callback`.
    /// An error returned by the callback is reported as an invalid value for the flag.
    pub fn callback<E: std::fmt::Display>(
        mut callback: impl FnMut(T) -> Result<(), E> + 'a,
    ) -> Self {
        Destination::Callback(Box::new(move |value| {
            callback(value).map_err(|error| error.to_string())
        }))
    }

    pub(crate) fn accept(&mut self, value: T) -> Result<(), String> {
        match self {
            Destination::Variable(variable) => {
                **variable = value;
                Ok(())
            }
            Destination::Callback(callback) => callback(value),
        }
    }
}

impl<'a, T> std::fmt::Debug for Destination<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match self {
            Destination::Variable(_) => "Variable",
            Destination::Callback(_) => "Callback",
        };

        write!(f, "{class}[{t}]", t = std::any::type_name::<T>())
    }
}
