//! Transaction primitives.
//!
//! A `Transaction` is a single dated income or expense, always assigned to a
//! category.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    util::{normalize_optional_text, parse_uuid},
};

/// Direction of money. Categories carry one too, so the same kind tells
/// which side of the summary a category belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidName(format!(
                "invalid transaction type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category_id: Uuid,
        description: Option<String>,
        date: NaiveDate,
    ) -> ResultEngine<Self> {
        crate::util::validate_amount(amount)?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category_id,
            description: normalize_optional_text(description.as_deref()).unwrap_or_default(),
            date,
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kind: String,
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    pub date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Category,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            amount: ActiveValue::Set(tx.amount),
            category_id: ActiveValue::Set(tx.category_id.to_string()),
            description: ActiveValue::Set(tx.description.clone()),
            date: ActiveValue::Set(tx.date),
            created_at: ActiveValue::Set(tx.created_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "Transaction")?,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            amount: model.amount,
            category_id: parse_uuid(&model.category_id, "Category")?,
            description: model.description,
            date: model.date,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_storage_string() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(TransactionKind::try_from(kind.as_str()), Ok(kind));
        }
        assert!(TransactionKind::try_from("transfer").is_err());
    }

    #[test]
    fn new_rejects_non_positive_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let category = Uuid::new_v4();
        assert!(Transaction::new(TransactionKind::Expense, 0.0, category, None, date).is_err());
        assert!(Transaction::new(TransactionKind::Expense, -3.0, category, None, date).is_err());

        let tx = Transaction::new(TransactionKind::Expense, 3.5, category, None, date).unwrap();
        assert_eq!(tx.description, "");
    }

    #[test]
    fn new_trims_description() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let category = Uuid::new_v4();
        let tx = Transaction::new(
            TransactionKind::Expense,
            3.5,
            category,
            Some("  lunch  ".to_string()),
            date,
        )
        .unwrap();
        assert_eq!(tx.description, "lunch");

        let tx = Transaction::new(TransactionKind::Expense, 3.5, category, Some("   ".to_string()), date)
            .unwrap();
        assert_eq!(tx.description, "");
    }
}
