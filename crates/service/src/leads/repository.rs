use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::domain::NewLead;
use crate::errors::ServiceError;

/// Write-only persistence for leads.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Insert one lead row and return its id.
    async fn insert(&self, lead: NewLead, created_at: DateTime<Utc>) -> Result<Uuid, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StoredLead {
        pub id: Uuid,
        pub lead: NewLead,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Default)]
    pub struct MockLeadRepository {
        rows: Mutex<Vec<StoredLead>>,
        fail_inserts: AtomicBool,
    }

    impl MockLeadRepository {
        pub fn fail_inserts(&self) {
            self.fail_inserts.store(true, Ordering::SeqCst);
        }

        pub fn rows(&self) -> Vec<StoredLead> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeadRepository for MockLeadRepository {
        async fn insert(&self, lead: NewLead, created_at: DateTime<Utc>) -> Result<Uuid, ServiceError> {
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("mock insert failure".into()));
            }
            let id = Uuid::new_v4();
            self.rows.lock().unwrap().push(StoredLead { id, lead, created_at });
            Ok(id)
        }
    }
}
