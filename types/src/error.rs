use dioxus::prelude::ServerFnError;
use serde_json::json;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The shared error type for everything that talks to the marketplace backend.
///
/// Wraps an [`anyhow::Error`] so any source error can be propagated with `?`,
/// and optionally remembers the HTTP status the backend answered with.
#[derive(Debug)]
pub struct Error {
    inner: anyhow::Error,
    status: Option<u16>,
}

impl Error {
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Messages from the outermost error down to the root cause.
    pub fn chain(&self) -> Vec<String> {
        self.inner.chain().map(ToString::to_string).collect()
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.inner
    }

    /// The status to answer with. Anything that is not a 4xx or 5xx is
    /// reported as 502 so the failure is never sent as a success.
    pub fn http_status(&self) -> u16 {
        match self.status {
            None => 500,
            Some(code) if is_error_status(code) => code,
            Some(_) => 502,
        }
    }
}

pub fn is_error_status(code: u16) -> bool {
    (400..=599).contains(&code)
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<E> From<E> for Error
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self {
            inner: error.into(),
            status: None,
        }
    }
}

impl From<Error> for ServerFnError {
    fn from(error: Error) -> Self {
        let backtrace = error.inner.backtrace().to_string();
        ServerFnError::ServerError {
            message: error.to_string(),
            code: error.http_status(),
            details: Some(json!({
                "chain": error.chain(),
                "backtrace": backtrace,
            })),
        }
    }
}

#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_carries_status_and_chain() {
        let error = crate::err!("coupon not found").with_status(404);
        match ServerFnError::from(error) {
            ServerFnError::ServerError {
                message,
                code,
                details,
            } => {
                assert_eq!(message, "coupon not found");
                assert_eq!(code, 404);
                let chain = details.and_then(|d| d.get("chain").cloned());
                assert_eq!(chain, Some(json!(["coupon not found"])));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn status_defaults_to_internal_error() {
        let error = Error::from(std::io::Error::other("connection reset"));
        assert_eq!(error.status(), None);
        assert!(matches!(
            ServerFnError::from(error),
            ServerFnError::ServerError { code: 500, .. }
        ));
    }

    #[test]
    fn success_status_is_never_forwarded() {
        for status in [200, 204, 302] {
            let error = crate::err!("quota exceeded").with_status(status);
            match ServerFnError::from(error) {
                ServerFnError::ServerError { message, code, .. } => {
                    assert_eq!(message, "quota exceeded");
                    assert_eq!(code, 502);
                }
                other => panic!("unexpected error variant: {other:?}"),
            }
        }
    }
}
