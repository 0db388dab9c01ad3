use error_stack::Report;
use kernel::KernelError;

pub mod config;
pub mod dataset;
mod error;

/// Reads `key` from the process environment (after `.env` is applied).
/// A missing variable is `Ok(None)`.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("Failed to read environment variable {key}"))),
    }
}
