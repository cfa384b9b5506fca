use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

use super::domain::{
    Category, NavigationEntry, ServiceDetails, ServiceRecord, ServiceView, ServiceWithDetails,
    MAX_NAV_LIMIT, MAX_RELATED_SERVICES,
};
use super::repository::ContentRepository;
use crate::errors::ServiceError;

/// Read-side catalog service independent of web framework.
pub struct CatalogService<R: ContentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ContentRepository + ?Sized + 'static> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Categories ordered by name.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let categories = self.repo.list_categories().await.map_err(|e| {
            error!(error = %e, "failed to fetch service categories");
            e
        })?;
        debug!(count = categories.len(), "fetched service categories");
        Ok(categories)
    }

    #[instrument(skip(self))]
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>, ServiceError> {
        self.repo.find_category_by_slug(slug).await.map_err(|e| {
            error!(%slug, error = %e, "failed to fetch service category");
            e
        })
    }

    /// Services ordered by title, optionally restricted to the category with `category_slug`.
    ///
    /// An unknown category slug yields an empty list.
    ///
    /// # Examples
    /// ```
    /// use service::content::{CatalogService, repository::mock::MockContentRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockContentRepository::default());
    /// let dev = repo.add_category(1, "Development", "development");
    /// repo.add_service(10, "E-Commerce Solutions", "e-commerce-solutions", Some(dev.id));
    /// let svc = CatalogService::new(repo);
    /// let all = tokio_test::block_on(svc.list_services(Some("development"))).unwrap();
    /// assert_eq!(all[0].category_label, "Development");
    /// let none = tokio_test::block_on(svc.list_services(Some("gardening"))).unwrap();
    /// assert!(none.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn list_services(&self, category_slug: Option<&str>) -> Result<Vec<ServiceView>, ServiceError> {
        let result = match category_slug {
            Some(slug) => match self.repo.find_category_by_slug(slug).await {
                Ok(None) => {
                    debug!(%slug, "unknown category; no services");
                    return Ok(Vec::new());
                }
                Ok(Some(category)) => self
                    .repo
                    .list_services(Some(category.id), None)
                    .await
                    .map(|rows| rows.into_iter().map(|r| ServiceView::new(r, Some(category.clone()))).collect()),
                Err(e) => Err(e),
            },
            None => match self.repo.list_services(None, None).await {
                Ok(rows) => Ok(self.attach_categories(rows, &[]).await),
                Err(e) => Err(e),
            },
        };
        let services: Vec<ServiceView> = result.map_err(|e| {
            error!(category = ?category_slug, error = %e, "failed to fetch services");
            e
        })?;
        debug!(count = services.len(), "fetched services");
        Ok(services)
    }

    /// A service with its category, details and up to three related services.
    ///
    /// Related services come from the details' explicit list when that
    /// resolves to anything, otherwise from the same category. The service
    /// itself is never among them. Failures while resolving related services
    /// only shrink that list; failures fetching the service or its details
    /// are errors.
    #[instrument(skip(self))]
    pub async fn get_service_by_slug(&self, slug: &str) -> Result<Option<ServiceWithDetails>, ServiceError> {
        let record = match self.repo.find_service_by_slug(slug).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                info!(%slug, "service not found");
                return Ok(None);
            }
            Err(e) => {
                error!(%slug, error = %e, "failed to fetch service");
                return Err(e);
            }
        };

        let category = match record.category_id {
            Some(cid) => self.category_or_none(cid).await,
            None => None,
        };

        let details = self
            .repo
            .find_details(record.id)
            .await
            .map_err(|e| {
                error!(service_id = record.id, error = %e, "failed to fetch service details");
                e
            })?
            .map(|row| ServiceDetails::decode(&row));

        let mut related = match &details {
            Some(d) if !d.related_services.is_empty() => self.explicit_related(&record, &d.related_services).await,
            _ => Vec::new(),
        };
        if related.is_empty() {
            related = self.same_category_related(&record).await;
        }
        let known: Vec<Category> = category.iter().cloned().collect();
        let related_services = self.attach_categories(related, &known).await;

        Ok(Some(ServiceWithDetails {
            service: ServiceView::new(record, category),
            details,
            related_services,
        }))
    }

    /// Every category with up to `limit` of its services, for navigation menus.
    ///
    /// `limit` is clamped to `1..=MAX_NAV_LIMIT`.
    /// Never fails: a category whose services cannot be fetched gets an empty
    /// list, and a failure to list categories yields an empty menu.
    #[instrument(skip(self))]
    pub async fn navigation(&self, limit: u64) -> Vec<NavigationEntry> {
        let limit = limit.clamp(1, MAX_NAV_LIMIT);
        let categories = match self.repo.list_categories().await {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, "navigation: failed to fetch categories");
                return Vec::new();
            }
        };

        let mut set = JoinSet::new();
        for (idx, category) in categories.iter().enumerate() {
            let repo = Arc::clone(&self.repo);
            let cid = category.id;
            set.spawn(async move { (idx, repo.list_services(Some(cid), Some(limit)).await) });
        }

        let mut entries: Vec<NavigationEntry> = categories
            .into_iter()
            .map(|category| NavigationEntry { category, services: Vec::new() })
            .collect();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, Ok(rows))) => {
                    let category = entries[idx].category.clone();
                    entries[idx].services = rows.into_iter().map(|r| ServiceView::new(r, Some(category.clone()))).collect();
                }
                Ok((idx, Err(e))) => {
                    warn!(category = %entries[idx].category.slug, error = %e, "navigation: services unavailable for category");
                }
                Err(e) => warn!(error = %e, "navigation: category task failed"),
            }
        }
        debug!(categories = entries.len(), "navigation built");
        entries
    }

    async fn category_or_none(&self, id: i32) -> Option<Category> {
        match self.repo.find_category(id).await {
            Ok(c) => {
                if c.is_none() {
                    warn!(category_id = id, "service references a missing category");
                }
                c
            }
            Err(e) => {
                warn!(category_id = id, error = %e, "category lookup failed; using fallback label");
                None
            }
        }
    }

    async fn explicit_related(&self, record: &ServiceRecord, ids: &[i32]) -> Vec<ServiceRecord> {
        let mut seen = HashSet::new();
        let wanted: Vec<i32> = ids.iter().copied().filter(|id| *id != record.id && seen.insert(*id)).collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        let rows = match self.repo.find_services_by_ids(&wanted).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(service_id = record.id, error = %e, "related services lookup failed");
                return Vec::new();
            }
        };
        // Keep the curated order, not the store's row order.
        let mut by_id: HashMap<i32, ServiceRecord> = rows.into_iter().map(|r| (r.id, r)).collect();
        wanted
            .iter()
            .filter_map(|id| by_id.remove(id))
            .take(MAX_RELATED_SERVICES)
            .collect()
    }

    async fn same_category_related(&self, record: &ServiceRecord) -> Vec<ServiceRecord> {
        let Some(cid) = record.category_id else { return Vec::new() };
        match self.repo.list_category_siblings(cid, record.id, MAX_RELATED_SERVICES as u64).await {
            Ok(mut rows) => {
                rows.retain(|r| r.id != record.id);
                rows.truncate(MAX_RELATED_SERVICES);
                rows
            }
            Err(e) => {
                warn!(service_id = record.id, error = %e, "same-category services lookup failed");
                Vec::new()
            }
        }
    }

    /// Resolve each service's category, fetching the distinct unknown ones in parallel.
    async fn attach_categories(&self, rows: Vec<ServiceRecord>, known: &[Category]) -> Vec<ServiceView> {
        let mut resolved: HashMap<i32, Category> = known.iter().map(|c| (c.id, c.clone())).collect();
        let missing: HashSet<i32> = rows
            .iter()
            .filter_map(|r| r.category_id)
            .filter(|id| !resolved.contains_key(id))
            .collect();

        let mut set = JoinSet::new();
        for cid in missing {
            let repo = Arc::clone(&self.repo);
            set.spawn(async move { (cid, repo.find_category(cid).await) });
        }
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((cid, Ok(Some(c)))) => { resolved.insert(cid, c); }
                Ok((cid, Ok(None))) => warn!(category_id = cid, "service references a missing category"),
                Ok((cid, Err(e))) => warn!(category_id = cid, error = %e, "category lookup failed; using fallback label"),
                Err(e) => warn!(error = %e, "category lookup task failed"),
            }
        }

        rows.into_iter()
            .map(|r| {
                let category = r.category_id.and_then(|cid| resolved.get(&cid).cloned());
                ServiceView::new(r, category)
            })
            .collect()
    }
}
