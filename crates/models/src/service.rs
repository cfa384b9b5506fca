use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, service_category};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: Option<i32>,
    pub icon: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(service_category::Entity)
                .from(Column::CategoryId)
                .to(service_category::Column::Id)
                .into(),
        }
    }
}

impl Related<service_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when inserting a service.
#[derive(Clone, Debug)]
pub struct NewService<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category_id: Option<i32>,
    pub icon: &'a str,
    pub slug: &'a str,
}

/// Insert a service. Used by seeding tools and tests; the site only reads services.
pub async fn create(db: &DatabaseConnection, input: NewService<'_>) -> Result<Model, errors::ModelError> {
    if input.title.trim().is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    service_category::validate_slug(input.slug)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(input.title.to_string()),
        description: Set(input.description.to_string()),
        category_id: Set(input.category_id),
        icon: Set(input.icon.to_string()),
        slug: Set(input.slug.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
