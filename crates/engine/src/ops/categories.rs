use sea_orm::{ActiveValue, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    Category, CreateCategoryCmd, EngineError, ResultEngine, UpdateCategoryCmd, categories,
    defaults::DEFAULT_CATEGORIES,
    transactions,
    util::{normalize_optional_text, normalize_required_name, parse_uuid, validate_budget_limit},
};

use super::{Engine, with_tx};

impl Engine {
    /// All categories, ordered by name.
    pub async fn list_categories(&self) -> ResultEngine<Vec<Category>> {
        categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .order_by_asc(categories::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    /// Return a single category.
    pub async fn category(&self, category_id: &str) -> ResultEngine<Category> {
        let id = parse_uuid(category_id, "Category")?;
        let model = categories::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("Category".to_string()))?;
        Category::try_from(model)
    }

    /// Add a new category. Id and creation time are assigned here.
    pub async fn create_category(&self, cmd: CreateCategoryCmd) -> ResultEngine<Category> {
        let category = Category::new(
            &cmd.name,
            cmd.kind,
            cmd.budget_limit,
            cmd.color.as_deref(),
        )?;
        categories::ActiveModel::from(&category)
            .insert(&self.database)
            .await?;
        tracing::debug!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Change name, budget limit and/or color of a category.
    ///
    /// Only the supplied fields are written.
    pub async fn update_category(
        &self,
        category_id: &str,
        cmd: UpdateCategoryCmd,
    ) -> ResultEngine<Category> {
        if cmd.is_empty() {
            return Err(EngineError::EmptyUpdate);
        }
        let id = parse_uuid(category_id, "Category")?;

        with_tx!(self, |db_tx| {
            let model = categories::Entity::find_by_id(id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("Category".to_string()))?;

            let mut active: categories::ActiveModel = model.into();
            if let Some(name) = cmd.name.as_deref() {
                active.name = ActiveValue::Set(normalize_required_name(name, "category")?);
            }
            if let Some(budget_limit) = cmd.budget_limit {
                validate_budget_limit(budget_limit)?;
                active.budget_limit = ActiveValue::Set(budget_limit);
            }
            if let Some(color) = cmd.color.as_deref() {
                let color = normalize_optional_text(Some(color)).ok_or_else(|| {
                    EngineError::InvalidName("color must not be empty".to_string())
                })?;
                active.color = ActiveValue::Set(color);
            }

            let updated = active.update(&db_tx).await?;
            tracing::debug!(id = %id, "category updated");
            Category::try_from(updated)
        })
    }

    /// Delete a category that no transaction references.
    pub async fn delete_category(&self, category_id: &str) -> ResultEngine<()> {
        let id = parse_uuid(category_id, "Category")?.to_string();

        with_tx!(self, |db_tx| {
            let referencing = transactions::Entity::find()
                .filter(transactions::Column::CategoryId.eq(id.clone()))
                .count(&db_tx)
                .await?;
            if referencing > 0 {
                return Err(EngineError::CategoryInUse(format!(
                    "{referencing} transaction(s) reference category {id}"
                )));
            }

            let result = categories::Entity::delete_by_id(id.clone())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound("Category".to_string()));
            }
            tracing::debug!(id = %id, "category deleted");
            Ok(())
        })
    }

    /// Insert the default categories if none exist yet.
    ///
    /// Returns how many categories were inserted: either all defaults or zero.
    pub async fn seed_default_categories(&self) -> ResultEngine<usize> {
        with_tx!(self, |db_tx| {
            let existing = categories::Entity::find().count(&db_tx).await?;
            if existing > 0 {
                return Ok(0);
            }

            let mut models = Vec::with_capacity(DEFAULT_CATEGORIES.len());
            for default in &DEFAULT_CATEGORIES {
                let category = Category::new(
                    default.name,
                    default.kind,
                    Some(default.budget_limit),
                    Some(default.color),
                )?;
                models.push(categories::ActiveModel::from(&category));
            }
            let inserted = models.len();
            categories::Entity::insert_many(models).exec(&db_tx).await?;

            tracing::info!("seeded {inserted} default categories");
            Ok(inserted)
        })
    }
}
