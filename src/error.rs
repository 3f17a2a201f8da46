use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Recoverable input rejections. The `Display` text is printed to the user
/// verbatim; the current iteration is discarded and the session continues.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Menu not found, please choose one of the available items.")]
    UnknownMenuItem,
    #[error("Invalid quantity, please enter a whole number.")]
    InvalidQuantity,
}

pub type Result<T> = std::result::Result<T, OrderError>;
