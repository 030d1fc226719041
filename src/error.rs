#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base path {0:?} must be empty or start with '/'")]
    RelativeBasePath(String),
    #[error("Base path {0:?} is not a plain URL path prefix")]
    InvalidBasePath(String),
    #[error("Route path {0:?} must start with '/'")]
    InvalidRoutePath(String),
    #[error("Route path {0:?} is declared more than once")]
    DuplicateRoutePath(String),
}
