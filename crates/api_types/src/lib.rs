use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of money: shared by categories and transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Generic acknowledgement body, e.g. after a delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreate {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        /// Monthly limit; `0` (the default) means unlimited.
        pub budget_limit: Option<f64>,
        pub color: Option<String>,
    }

    /// Partial update. The category type cannot be changed.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub name: Option<String>,
        pub budget_limit: Option<f64>,
        pub color: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: String,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub budget_limit: f64,
        pub color: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    /// Query string of `GET /transactions`.
    ///
    /// The month filter is applied only when both `month` and `year` are set.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionList {
        pub month: Option<u32>,
        pub year: Option<i32>,
        #[serde(rename = "type")]
        pub kind: Option<TransactionKind>,
        pub category_id: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount: f64,
        pub category_id: String,
        pub description: Option<String>,
        /// ISO calendar date (`YYYY-MM-DD`).
        pub date: NaiveDate,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        #[serde(rename = "type")]
        pub kind: Option<TransactionKind>,
        pub amount: Option<f64>,
        pub category_id: Option<String>,
        pub description: Option<String>,
        pub date: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount: f64,
        pub category_id: String,
        pub description: String,
        pub date: NaiveDate,
        pub created_at: DateTime<Utc>,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthQuery {
        pub month: u32,
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct YearQuery {
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryBreakdown {
        pub category_id: String,
        pub category_name: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub total: f64,
        pub budget_limit: f64,
        pub color: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlySummary {
        pub month: u32,
        pub year: i32,
        pub total_income: f64,
        pub total_expenses: f64,
        pub balance: f64,
        pub category_breakdown: Vec<CategoryBreakdown>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthTotals {
        pub month: u32,
        pub income: f64,
        pub expenses: f64,
        pub balance: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct YearlySummary {
        pub year: i32,
        pub monthly_data: Vec<MonthTotals>,
        pub total_income: f64,
        pub total_expenses: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetStatus {
        pub category_id: String,
        pub category_name: String,
        pub budget_limit: f64,
        pub spent: f64,
        pub remaining: f64,
        /// Share of the limit already spent, capped at 100.
        pub percentage: f64,
        pub over_budget: bool,
        pub color: String,
    }
}
