//! Explicit success-or-failure outcome used instead of panics for
//! recoverable domain failures.

/// Outcome of a domain operation: either a success carrying a value or a
/// failure carrying an error message.
///
/// Use `Outcome<()>` for operations that succeed without a value. A success
/// never carries an error and a failure always carries one; the enum makes the
/// other combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The operation succeeded.
    Ok(T),
    /// The operation failed with a message describing why.
    Fail(String),
}

impl<T> Outcome<T> {
    /// Builds a successful outcome.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Builds a failed outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Fail(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the carried value.
    ///
    /// # Panics
    ///
    /// Panics if called on a failed outcome. Callers must check
    /// [`is_success`](Self::is_success) first or match on the enum.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => {
                panic!("can't get the value of a failed outcome, use `error_value` instead")
            }
        }
    }

    /// Consumes the outcome and returns the carried value.
    ///
    /// # Panics
    ///
    /// Panics if called on a failed outcome.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => {
                panic!("can't get the value of a failed outcome, use `error_value` instead")
            }
        }
    }

    /// Returns the failure message.
    ///
    /// # Panics
    ///
    /// Panics if called on a successful outcome.
    pub fn error_value(&self) -> &str {
        match self {
            Outcome::Fail(message) => message,
            Outcome::Ok(_) => panic!("can't get the error value of a successful outcome"),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Fail(message) => Outcome::Fail(message),
        }
    }

    /// Rewrites the failure message, leaving a success untouched.
    pub fn map_failure(self, f: impl FnOnce(String) -> String) -> Outcome<T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(message) => Outcome::Fail(f(message)),
        }
    }

    /// Chains another fallible step after a success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Fail(message) => Outcome::Fail(message),
        }
    }

    /// Converts into a standard [`Result`] with the message as the error.
    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl Outcome<()> {
    /// Scans `results` left to right and returns the first failure, or a
    /// void success if every element succeeded (including an empty input).
    pub fn combine<'a, T: 'a>(results: impl IntoIterator<Item = &'a Outcome<T>>) -> Outcome<()> {
        for result in results {
            if let Outcome::Fail(message) = result {
                return Outcome::Fail(message.clone());
            }
        }
        Outcome::Ok(())
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(message) => Err(message),
        }
    }
}

impl<T> From<Result<T, String>> for Outcome<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(message) => Outcome::Fail(message),
        }
    }
}
