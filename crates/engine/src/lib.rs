//! Storage and reporting for the budget planner.
//!
//! [`Engine`] owns the database connection and exposes the category store,
//! the transaction store and the summary reports. Entities are sea-orm models
//! kept next to the domain types they map to.

pub use categories::{Category, DEFAULT_COLOR};
pub use commands::{
    CreateCategoryCmd, CreateTransactionCmd, UpdateCategoryCmd, UpdateTransactionCmd,
};
pub use defaults::{DEFAULT_CATEGORIES, DefaultCategory};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder, MAX_LIST_LIMIT, TransactionListFilter};
pub use period::MonthPeriod;
pub use summary::{
    BudgetStatus, CategoryTotal, MonthTotals, MonthlySummary, UNKNOWN_CATEGORY_NAME,
    YearlySummary,
};
pub use transactions::{Transaction, TransactionKind};

mod categories;
mod commands;
mod defaults;
mod error;
mod ops;
mod period;
mod summary;
mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
