/// Creates a new ad hoc error via `format_args!`.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::adhoc_from_args(format_args!($($tt)*))
    }}
}

pub(crate) use err;

/// An error that can occur in this crate.
///
/// This crate follows the "one true error type" pattern: a single error type
/// for everything, carrying a human readable message and an optional causal
/// chain. Callers are expected to read the message; there are deliberately
/// no introspection facilities. Errors compose by attaching context, e.g.,
/// `"strftime formatting failed: %Y failed: ..."`.
#[derive(Clone, Debug)]
pub struct Error {
    /// Boxed so that an `Error` is one word. Errors are for sad paths; the
    /// happy path only pays for a null-pointer-free pointer.
    inner: Box<ErrorInner>,
}

#[derive(Clone, Debug)]
struct ErrorInner {
    message: Box<str>,
    cause: Option<Error>,
}

impl Error {
    /// Creates an error from an arbitrary `core::fmt::Arguments`.
    ///
    /// Callers should use the `err!` macro, which routes through
    /// `format_args!` for them.
    pub(crate) fn adhoc_from_args<'a>(
        message: core::fmt::Arguments<'a>,
    ) -> Error {
        Error::from_message(message.to_string().into_boxed_str())
    }

    fn from_message(message: Box<str>) -> Error {
        Error { inner: Box::new(ErrorInner { message, cause: None }) }
    }

    /// Returns a new error equivalent to `self`, with `cause` attached as
    /// the tail of its causal chain.
    pub(crate) fn with_cause(self, cause: Error) -> Error {
        let ErrorInner { message, cause: existing } = *self.inner;
        let cause = match existing {
            None => cause,
            Some(existing) => existing.with_cause(cause),
        };
        Error {
            inner: Box::new(ErrorInner { message, cause: Some(cause) }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.inner.message)?;
        if let Some(ref cause) = self.inner.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<jiff::Error> for Error {
    fn from(e: jiff::Error) -> Error {
        Error::from_message(e.to_string().into_boxed_str())
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Error {
        Error::from_message(message.into())
    }
}

impl From<String> for Error {
    fn from(message: String) -> Error {
        Error::from_message(message.into_boxed_str())
    }
}

/// A simple trait for attaching context to lower level errors.
///
/// This is a stripped down version of what `anyhow` provides, so that the
/// library half of this crate doesn't need to pull it in.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the error, if one exists, with `consequent`. The
    /// original error becomes the cause of `consequent`.
    fn context(self, consequent: impl Into<Error>) -> Result<T, Error>;

    /// Like `context`, but hides error construction behind a closure so the
    /// happy path doesn't pay for it.
    fn with_context<C: Into<Error>, F: FnOnce() -> C>(
        self,
        consequent: F,
    ) -> Result<T, Error>;
}

impl<T, E: Into<Error>> ErrorContext<T> for Result<T, E> {
    fn context(self, consequent: impl Into<Error>) -> Result<T, Error> {
        self.map_err(|cause| consequent.into().with_cause(cause.into()))
    }

    fn with_context<C: Into<Error>, F: FnOnce() -> C>(
        self,
        consequent: F,
    ) -> Result<T, Error> {
        self.map_err(|cause| consequent().into().with_cause(cause.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_renders_outermost_first() {
        let result: Result<(), Error> = Err(err!("inner detail"));
        let err = result.context("outer failed").unwrap_err();
        assert_eq!(err.to_string(), "outer failed: inner detail");
    }

    #[test]
    fn with_cause_appends_to_tail() {
        let err = err!("a").with_cause(err!("b")).with_cause(err!("c"));
        assert_eq!(err.to_string(), "a: b: c");
    }
}
