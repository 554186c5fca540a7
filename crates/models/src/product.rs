use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A product that may not have been persisted yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self { id: None, name: name.into(), price }
    }
}

impl From<Model> for ProductDraft {
    fn from(m: Model) -> Self {
        Self { id: Some(m.id), name: m.name, price: m.price }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert when the draft has no id, otherwise overwrite the row with that id
/// (inserting it under that id if no such row exists).
pub async fn save(db: &DatabaseConnection, draft: ProductDraft) -> Result<Model, errors::ModelError> {
    let Some(id) = draft.id else {
        let am = ActiveModel { id: NotSet, name: Set(draft.name), price: Set(draft.price) };
        return am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()));
    };

    let am = ActiveModel { id: Set(id), name: Set(draft.name), price: Set(draft.price) };
    if find_by_id(db, id).await?.is_some() {
        am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
    } else {
        am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
    }
}
