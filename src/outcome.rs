/// Result of a step that never fails outright: either the real value, or a
/// default substituted because the underlying service failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    Success(T),
    Fallback { value: T, cause: E },
}

impl<T, E> Outcome<T, E> {
    /// Keeps an `Ok` value, or substitutes `fallback()` and records the error.
    pub fn or_fallback(result: Result<T, E>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(cause) => Outcome::Fallback {
                value: fallback(),
                cause,
            },
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn cause(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Fallback { cause, .. } => Some(cause),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_becomes_success() {
        let outcome: Outcome<&str, &str> = Outcome::or_fallback(Ok("value"), || "default");
        assert_eq!(outcome, Outcome::Success("value"));
        assert!(!outcome.is_fallback());
        assert!(outcome.cause().is_none());
    }

    #[test]
    fn err_substitutes_default_and_keeps_cause() {
        let outcome: Outcome<&str, &str> = Outcome::or_fallback(Err("boom"), || "default");
        assert!(outcome.is_fallback());
        assert_eq!(outcome.cause(), Some(&"boom"));
        assert_eq!(outcome.into_value(), "default");
    }

    #[test]
    fn fallback_closure_not_called_on_success() {
        let outcome: Outcome<u8, ()> =
            Outcome::or_fallback(Ok(1), || panic!("fallback must be lazy"));
        assert_eq!(outcome.into_value(), 1);
    }
}
