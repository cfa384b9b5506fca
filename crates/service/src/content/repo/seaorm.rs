use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use models::{service, service_category, service_details};

use crate::content::domain::{Category, DetailsRow, ServiceRecord};
use crate::content::repository::ContentRepository;
use crate::errors::ServiceError;

pub struct SeaOrmContentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ContentRepository for SeaOrmContentRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let rows = service_category::Entity::find()
            .order_by_asc(service_category::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
        let row = service_category::Entity::find_by_id(id)
            .one(&self.db)
            .await?;
        Ok(row.map(Category::from))
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, ServiceError> {
        let row = service_category::Entity::find()
            .filter(service_category::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        Ok(row.map(Category::from))
    }

    async fn list_services(&self, category_id: Option<i32>, limit: Option<u64>) -> Result<Vec<ServiceRecord>, ServiceError> {
        let mut finder = service::Entity::find();
        if let Some(cid) = category_id { finder = finder.filter(service::Column::CategoryId.eq(cid)); }
        finder = finder.order_by_asc(service::Column::Title);
        if let Some(n) = limit { finder = finder.limit(n); }
        let rows = finder.all(&self.db).await?;
        Ok(rows.into_iter().map(ServiceRecord::from).collect())
    }

    async fn find_service_by_slug(&self, slug: &str) -> Result<Option<ServiceRecord>, ServiceError> {
        let row = service::Entity::find()
            .filter(service::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        Ok(row.map(ServiceRecord::from))
    }

    async fn find_services_by_ids(&self, ids: &[i32]) -> Result<Vec<ServiceRecord>, ServiceError> {
        if ids.is_empty() { return Ok(Vec::new()); }
        let rows = service::Entity::find()
            .filter(service::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ServiceRecord::from).collect())
    }

    async fn list_category_siblings(&self, category_id: i32, exclude_id: i32, limit: u64) -> Result<Vec<ServiceRecord>, ServiceError> {
        let rows = service::Entity::find()
            .filter(service::Column::CategoryId.eq(category_id))
            .filter(service::Column::Id.ne(exclude_id))
            .order_by_asc(service::Column::Title)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ServiceRecord::from).collect())
    }

    async fn find_details(&self, service_id: i32) -> Result<Option<DetailsRow>, ServiceError> {
        let row = service_details::Entity::find()
            .filter(service_details::Column::ServiceId.eq(service_id))
            .one(&self.db)
            .await?;
        Ok(row.map(DetailsRow::from))
    }
}
