//! Category registry.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, TransactionKind, util::parse_uuid};

/// Colour used when a category is created without one.
pub const DEFAULT_COLOR: &str = "#3D405B";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
    /// Monthly limit; `0.0` means the category is unlimited.
    pub budget_limit: f64,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: &str,
        kind: TransactionKind,
        budget_limit: Option<f64>,
        color: Option<&str>,
    ) -> ResultEngine<Self> {
        let name = crate::util::normalize_required_name(name, "category")?;
        let budget_limit = budget_limit.unwrap_or(0.0);
        crate::util::validate_budget_limit(budget_limit)?;
        let color = crate::util::normalize_optional_text(color)
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            kind,
            budget_limit,
            color,
            created_at: Utc::now(),
        })
    }

    /// Whether spending in this category is capped.
    pub fn has_budget(&self) -> bool {
        self.budget_limit > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub kind: String,
    pub budget_limit: f64,
    pub color: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Category> for ActiveModel {
    fn from(category: &Category) -> Self {
        Self {
            id: ActiveValue::Set(category.id.to_string()),
            name: ActiveValue::Set(category.name.clone()),
            kind: ActiveValue::Set(category.kind.as_str().to_string()),
            budget_limit: ActiveValue::Set(category.budget_limit),
            color: ActiveValue::Set(category.color.clone()),
            created_at: ActiveValue::Set(category.created_at),
        }
    }
}

impl TryFrom<Model> for Category {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "Category")?,
            name: model.name,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            budget_limit: model.budget_limit,
            color: model.color,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let category = Category::new("  Gym ", TransactionKind::Expense, None, None).unwrap();
        assert_eq!(category.name, "Gym");
        assert_eq!(category.budget_limit, 0.0);
        assert_eq!(category.color, DEFAULT_COLOR);
        assert!(!category.has_budget());
    }

    #[test]
    fn new_rejects_blank_name_and_negative_budget() {
        assert!(Category::new("   ", TransactionKind::Expense, None, None).is_err());
        assert!(Category::new("Gym", TransactionKind::Expense, Some(-1.0), None).is_err());
    }
}
