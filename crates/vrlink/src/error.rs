/// Error reported by a package registry backend.
///
/// Resolution never surfaces these: a failed lookup behaves like a package
/// that is not installed. The type exists so backends can still report what
/// went wrong to callers that query them directly.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    #[error("registry query failed: {0}")]
    Query(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
