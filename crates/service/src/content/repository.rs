use async_trait::async_trait;

use super::domain::{Category, DetailsRow, ServiceRecord};
use crate::errors::ServiceError;

/// Read-only access to the catalog tables.
///
/// Single lookups return `Ok(None)` when nothing matches; list queries return
/// an empty vector. `Err` is reserved for store failures.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;
    async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError>;
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, ServiceError>;

    /// Services ordered by title, optionally restricted to one category and capped.
    async fn list_services(&self, category_id: Option<i32>, limit: Option<u64>) -> Result<Vec<ServiceRecord>, ServiceError>;
    async fn find_service_by_slug(&self, slug: &str) -> Result<Option<ServiceRecord>, ServiceError>;
    /// Services whose id is in `ids`, in no particular order.
    async fn find_services_by_ids(&self, ids: &[i32]) -> Result<Vec<ServiceRecord>, ServiceError>;
    /// Up to `limit` services of a category other than `exclude_id`, ordered by title.
    async fn list_category_siblings(&self, category_id: i32, exclude_id: i32, limit: u64) -> Result<Vec<ServiceRecord>, ServiceError>;

    async fn find_details(&self, service_id: i32) -> Result<Option<DetailsRow>, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockContentRepository {
        categories: Mutex<Vec<Category>>,
        services: Mutex<Vec<ServiceRecord>>,
        details: Mutex<HashMap<i32, DetailsRow>>, // key: service_id
        fail_all: AtomicBool,
        failing_categories: Mutex<HashSet<i32>>, // service listings fail for these category ids
        fail_related: AtomicBool,
    }

    impl MockContentRepository {
        pub fn add_category(&self, id: i32, name: &str, slug: &str) -> Category {
            let c = Category { id, name: name.into(), slug: slug.into() };
            self.categories.lock().unwrap().push(c.clone());
            c
        }

        pub fn add_service(&self, id: i32, title: &str, slug: &str, category_id: Option<i32>) -> ServiceRecord {
            let s = ServiceRecord {
                id,
                title: title.into(),
                description: format!("{title} description"),
                category_id,
                icon: "Code".into(),
                slug: slug.into(),
            };
            self.services.lock().unwrap().push(s.clone());
            s
        }

        pub fn add_details(&self, row: DetailsRow) {
            self.details.lock().unwrap().insert(row.service_id, row);
        }

        /// Every call fails as if the database were unreachable.
        pub fn fail_all(&self) {
            self.fail_all.store(true, Ordering::SeqCst);
        }

        /// Service listings for one category fail; everything else works.
        pub fn fail_services_of(&self, category_id: i32) {
            self.failing_categories.lock().unwrap().insert(category_id);
        }

        /// Lookups of explicitly related services fail.
        pub fn fail_related_lookups(&self) {
            self.fail_related.store(true, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.fail_all.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("mock store unavailable".into()));
            }
            Ok(())
        }

        fn sorted_services(&self, pred: impl Fn(&ServiceRecord) -> bool) -> Vec<ServiceRecord> {
            let mut out: Vec<ServiceRecord> = self.services.lock().unwrap().iter().filter(|s| pred(s)).cloned().collect();
            out.sort_by(|a, b| a.title.cmp(&b.title));
            out
        }
    }

    #[async_trait]
    impl ContentRepository for MockContentRepository {
        async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
            self.check()?;
            let mut out = self.categories.lock().unwrap().clone();
            out.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(out)
        }

        async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
            self.check()?;
            Ok(self.categories.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, ServiceError> {
            self.check()?;
            Ok(self.categories.lock().unwrap().iter().find(|c| c.slug == slug).cloned())
        }

        async fn list_services(&self, category_id: Option<i32>, limit: Option<u64>) -> Result<Vec<ServiceRecord>, ServiceError> {
            self.check()?;
            if let Some(cid) = category_id {
                if self.failing_categories.lock().unwrap().contains(&cid) {
                    return Err(ServiceError::Db(format!("mock failure for category {cid}")));
                }
            }
            let mut out = self.sorted_services(|s| category_id.map_or(true, |cid| s.category_id == Some(cid)));
            if let Some(n) = limit { out.truncate(n as usize); }
            Ok(out)
        }

        async fn find_service_by_slug(&self, slug: &str) -> Result<Option<ServiceRecord>, ServiceError> {
            self.check()?;
            Ok(self.services.lock().unwrap().iter().find(|s| s.slug == slug).cloned())
        }

        async fn find_services_by_ids(&self, ids: &[i32]) -> Result<Vec<ServiceRecord>, ServiceError> {
            self.check()?;
            if self.fail_related.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("mock related lookup failure".into()));
            }
            // Reverse insertion order so callers cannot rely on row order.
            Ok(self.services.lock().unwrap().iter().rev().filter(|s| ids.contains(&s.id)).cloned().collect())
        }

        async fn list_category_siblings(&self, category_id: i32, exclude_id: i32, limit: u64) -> Result<Vec<ServiceRecord>, ServiceError> {
            self.check()?;
            let mut out = self.sorted_services(|s| s.category_id == Some(category_id) && s.id != exclude_id);
            out.truncate(limit as usize);
            Ok(out)
        }

        async fn find_details(&self, service_id: i32) -> Result<Option<DetailsRow>, ServiceError> {
            self.check()?;
            Ok(self.details.lock().unwrap().get(&service_id).cloned())
        }
    }
}
