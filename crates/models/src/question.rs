use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A trivia question row. The serialized form of this model is the JSON
/// projection exposed by every endpoint: `{id, question, answer, category,
/// difficulty}`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    question: &str,
    answer: Option<String>,
    category: Option<i32>,
    difficulty: Option<i32>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        question: Set(question.to_string()),
        answer: Set(answer),
        category: Set(category),
        difficulty: Set(difficulty),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
