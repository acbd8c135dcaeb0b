use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridError {
    #[error("invalid grid reference [row, column]")]
    InvalidCoordinate,
    #[error("mine count does not fit the grid")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GridError>;
