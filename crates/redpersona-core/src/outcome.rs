//! Success-or-degraded results for operations that must always produce a value.

/// The result of an operation that never fails outright.
///
/// `Degraded` still carries a usable value (an empty profile, a template
/// persona) alongside the cause that forced the substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    Complete(T),
    Degraded { value: T, cause: E },
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    /// The reason for degradation, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&E> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { cause, .. } => Some(cause),
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }
}
