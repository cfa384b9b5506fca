use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::leads::domain::NewLead;
use crate::leads::repository::LeadRepository;

pub struct SeaOrmLeadRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl LeadRepository for SeaOrmLeadRepository {
    async fn insert(&self, lead: NewLead, created_at: DateTime<Utc>) -> Result<Uuid, ServiceError> {
        let created = models::lead::create(&self.db, lead, created_at).await?;
        Ok(created.id)
    }
}
