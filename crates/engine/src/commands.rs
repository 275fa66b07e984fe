//! Command structs for engine write operations.
//!
//! These types group parameters for creates and partial updates, keeping call
//! sites readable and avoiding long argument lists.

use chrono::NaiveDate;

use crate::TransactionKind;

/// Create a category.
#[derive(Clone, Debug)]
pub struct CreateCategoryCmd {
    pub name: String,
    pub kind: TransactionKind,
    pub budget_limit: Option<f64>,
    pub color: Option<String>,
}

impl CreateCategoryCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            budget_limit: None,
            color: None,
        }
    }

    #[must_use]
    pub fn budget_limit(mut self, budget_limit: f64) -> Self {
        self.budget_limit = Some(budget_limit);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Partial update of a category. The kind is fixed at creation.
#[derive(Clone, Debug, Default)]
pub struct UpdateCategoryCmd {
    pub name: Option<String>,
    pub budget_limit: Option<f64>,
    pub color: Option<String>,
}

impl UpdateCategoryCmd {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.budget_limit.is_none() && self.color.is_none()
    }
}

/// Create a transaction.
///
/// `category_id` is kept as received: an id that does not parse is reported
/// the same way as one that is not stored.
#[derive(Clone, Debug)]
pub struct CreateTransactionCmd {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category_id: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl CreateTransactionCmd {
    #[must_use]
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category_id: category_id.into(),
            description: None,
            date,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of a transaction.
#[derive(Clone, Debug, Default)]
pub struct UpdateTransactionCmd {
    pub kind: Option<TransactionKind>,
    pub amount: Option<f64>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateTransactionCmd {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}
