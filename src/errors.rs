use thiserror::Error;

use crate::pizza::PizzaKind;

#[derive(Debug, Error)]
pub enum PizzeriaError {
    #[error("No topping named {0}")]
    InvalidTopping(String),
    #[error("{0} has a fixed recipe, its toppings can not be changed")]
    FixedRecipe(PizzaKind),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Error saving orders to file {path}: {source}")]
    ExportError {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not read the orders file: {0}")]
    FileReaderError(String),
    #[error("Order manager lock poisoned")]
    LockError,
}

impl<T> From<std::sync::PoisonError<T>> for PizzeriaError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        PizzeriaError::LockError
    }
}

impl From<serde_json::Error> for PizzeriaError {
    fn from(error: serde_json::Error) -> Self {
        PizzeriaError::FileReaderError(error.to_string())
    }
}
