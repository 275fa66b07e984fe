//! Categories created on first startup, when the store has none.

use crate::TransactionKind;

pub struct DefaultCategory {
    pub name: &'static str,
    pub kind: TransactionKind,
    pub budget_limit: f64,
    pub color: &'static str,
}

const fn income(name: &'static str, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        kind: TransactionKind::Income,
        budget_limit: 0.0,
        color,
    }
}

const fn expense(name: &'static str, budget_limit: f64, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        kind: TransactionKind::Expense,
        budget_limit,
        color,
    }
}

pub const DEFAULT_CATEGORIES: [DefaultCategory; 11] = [
    income("Salary", "#2E5C42"),
    income("Freelance", "#8FB339"),
    income("Other Income", "#5C8A4E"),
    expense("Food & Dining", 500.0, "#E07A5F"),
    expense("Rent", 1500.0, "#3D405B"),
    expense("Utilities", 200.0, "#81B29A"),
    expense("Transportation", 300.0, "#F2CC8F"),
    expense("Entertainment", 200.0, "#6D597A"),
    expense("Shopping", 300.0, "#B56576"),
    expense("Healthcare", 150.0, "#355070"),
    expense("Other Expenses", 200.0, "#EAAC8B"),
];
