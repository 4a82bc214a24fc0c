use models::category;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

/// All categories ordered by their display label.
pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, ServiceError> {
    category::Entity::find()
        .order_by_asc(category::Column::Type)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// All categories ordered by id, as embedded in the questions listing.
pub async fn list_categories_by_id(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, ServiceError> {
    category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Existence lookup by id.
pub async fn get_category(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<category::Model>, ServiceError> {
    category::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn categories_list_ordered_by_label() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let sports = category::create(&db, "Sports").await?;
        let art = category::create(&db, "Art").await?;

        let by_label = list_categories(&db).await?;
        assert_eq!(
            by_label.iter().map(|c| c.r#type.as_str()).collect::<Vec<_>>(),
            vec!["Art", "Sports"]
        );

        let by_id = list_categories_by_id(&db).await?;
        assert_eq!(
            by_id.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![sports.id, art.id]
        );
        Ok(())
    }

    #[tokio::test]
    async fn category_lookup_by_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = category::create(&db, "History").await?;
        assert_eq!(get_category(&db, c.id).await?.map(|m| m.r#type), Some("History".into()));
        assert!(get_category(&db, c.id + 100).await?.is_none());
        Ok(())
    }
}
