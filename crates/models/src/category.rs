use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub r#type: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a category with the given display label. Categories are seeded,
/// not managed through the API; this exists for setup and tests.
pub async fn create(db: &DatabaseConnection, label: &str) -> Result<Model, errors::ModelError> {
    if label.trim().is_empty() {
        return Err(errors::ModelError::Validation("type required".into()));
    }
    let am = ActiveModel {
        r#type: Set(label.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
