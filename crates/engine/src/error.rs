//! The module contains the errors the engine can throw.
//!
//! Client-side mistakes are split by how the API reports them:
//!
//! - [`KeyNotFound`] for an unknown category or transaction id.
//! - [`UnknownCategory`] when a transaction points at a missing category.
//! - [`CategoryInUse`] when a category still has transactions.
//! - [`EmptyUpdate`] when an update carries no field at all.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`UnknownCategory`]: EngineError::UnknownCategory
//!  [`CategoryInUse`]: EngineError::CategoryInUse
//!  [`EmptyUpdate`]: EngineError::EmptyUpdate
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("Category not found: {0}")]
    UnknownCategory(String),
    #[error("Cannot delete category with existing transactions: {0}")]
    CategoryInUse(String),
    #[error("No fields to update")]
    EmptyUpdate,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            (Self::CategoryInUse(a), Self::CategoryInUse(b)) => a == b,
            (Self::EmptyUpdate, Self::EmptyUpdate) => true,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidPeriod(a), Self::InvalidPeriod(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
