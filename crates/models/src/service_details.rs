use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, service};

/// Optional 1:1 extension of a service.
///
/// `benefits` and `process` are JSON arrays of objects; `related_services`
/// is a JSON array of service ids. The service layer decodes them into
/// typed values and tolerates malformed payloads.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub service_id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub benefits: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub process: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub related_services: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    service_id: i32,
    benefits: Json,
    process: Json,
    related_services: &[i32],
) -> Result<Model, errors::ModelError> {
    if !benefits.is_array() || !process.is_array() {
        return Err(errors::ModelError::Validation("benefits and process must be JSON arrays".into()));
    }
    let am = ActiveModel {
        service_id: Set(service_id),
        benefits: Set(benefits),
        process: Set(process),
        related_services: Set(serde_json::json!(related_services)),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
