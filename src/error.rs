use thiserror::Error;

/// Errors returned by the [`Registry`](crate::registry::Registry).
///
/// All of these are expected conditions; callers decide how to report them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("{kind} already registered: {email}")]
    DuplicateEmail { kind: &'static str, email: String },
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),
}

/// Errors raised by employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Permission denied: {employee} ({role}) cannot create screenings; only administrators can")]
    PermissionDenied { employee: String, role: String },
}
