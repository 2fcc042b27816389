use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Submitted login form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Verifier failure categories. `BadCredentials` and `Failed` are
/// recognized authentication failures and are turned into user-facing
/// messages; `Unexpected` is re-signaled to the caller untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("invalid credentials")]
    BadCredentials,
    #[error("authentication failed: {0}")]
    Failed(String),
    #[error("verifier error: {0}")]
    Unexpected(String),
}

/// External credential-verification provider.
pub trait CredentialVerifier: Send + Sync + 'static {
    fn verify(&self, email: &str, password: &str) -> Result<(), VerifyError>;
}

/// Single expected account configured from the environment.
pub struct EnvCredentialVerifier {
    email: String,
    password: String,
}

impl EnvCredentialVerifier {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl CredentialVerifier for EnvCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<(), VerifyError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(VerifyError::BadCredentials)
        }
    }
}

/// Delegate to the verifier. `Ok(None)` means signed in; `Ok(Some(msg))`
/// is a recognized failure with its user-facing message; `Err` is an
/// unrecognized fault, fatal to the request.
pub fn authenticate(
    verifier: &dyn CredentialVerifier,
    credentials: &Credentials,
) -> Result<Option<String>, VerifyError> {
    match verifier.verify(&credentials.email, &credentials.password) {
        Ok(()) => Ok(None),
        Err(VerifyError::BadCredentials) => Ok(Some("Invalid credentials.".to_string())),
        Err(VerifyError::Failed(_)) => Ok(Some("Something went wrong.".to_string())),
        Err(e @ VerifyError::Unexpected(_)) => Err(e),
    }
}
