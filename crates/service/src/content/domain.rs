use serde::{Deserialize, Serialize};
use tracing::warn;

/// Label shown for a service whose category does not resolve.
pub const FALLBACK_CATEGORY_LABEL: &str = "Service";

/// Upper bound on related services attached to a detail view.
pub const MAX_RELATED_SERVICES: usize = 3;

/// Services per category in navigation menus unless configured otherwise.
pub const DEFAULT_NAV_LIMIT: u64 = 4;

/// Upper bound on services per navigation group.
pub const MAX_NAV_LIMIT: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// A service row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    pub icon: String,
    pub slug: String,
}

/// Raw details row; payload columns are undecoded JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsRow {
    pub service_id: i32,
    pub benefits: serde_json::Value,
    pub process: serde_json::Value,
    pub related_services: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBenefit {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProcessStep {
    pub title: String,
    pub description: String,
    pub order: i32,
}

/// Decoded service details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub benefits: Vec<ServiceBenefit>,
    /// Sorted by `order`.
    pub process: Vec<ServiceProcessStep>,
    pub related_services: Vec<i32>,
}

impl ServiceDetails {
    /// Decode a details row. A malformed column decodes to an empty list.
    pub fn decode(row: &DetailsRow) -> Self {
        let benefits = decode_list(row.service_id, "benefits", &row.benefits);
        let mut process: Vec<ServiceProcessStep> = decode_list(row.service_id, "process", &row.process);
        process.sort_by_key(|step| step.order);
        let related_services = decode_list(row.service_id, "related_services", &row.related_services);
        Self { benefits, process, related_services }
    }
}

fn decode_list<T: serde::de::DeserializeOwned>(service_id: i32, column: &str, value: &serde_json::Value) -> Vec<T> {
    if value.is_null() {
        return Vec::new();
    }
    match serde_json::from_value::<Vec<T>>(value.clone()) {
        Ok(list) => list,
        Err(e) => {
            warn!(service_id, column, error = %e, "malformed service_details column; treating as empty");
            Vec::new()
        }
    }
}

/// A service ready for display, with its category resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
    pub category: Option<Category>,
    pub category_label: String,
}

impl ServiceView {
    pub fn new(record: ServiceRecord, category: Option<Category>) -> Self {
        let category_label = category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| FALLBACK_CATEGORY_LABEL.to_string());
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            icon: record.icon,
            slug: record.slug,
            category,
            category_label,
        }
    }
}

/// Detail page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWithDetails {
    #[serde(flatten)]
    pub service: ServiceView,
    pub details: Option<ServiceDetails>,
    pub related_services: Vec<ServiceView>,
}

/// One navigation menu group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub category: Category,
    pub services: Vec<ServiceView>,
}

impl From<models::service_category::Model> for Category {
    fn from(m: models::service_category::Model) -> Self {
        Self { id: m.id, name: m.name, slug: m.slug }
    }
}

impl From<models::service::Model> for ServiceRecord {
    fn from(m: models::service::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category_id: m.category_id,
            icon: m.icon,
            slug: m.slug,
        }
    }
}

impl From<models::service_details::Model> for DetailsRow {
    fn from(m: models::service_details::Model) -> Self {
        Self {
            service_id: m.service_id,
            benefits: m.benefits,
            process: m.process,
            related_services: m.related_services,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ServiceRecord {
        ServiceRecord {
            id: 1,
            title: "Custom Website Development".into(),
            description: "Websites".into(),
            category_id: Some(9),
            icon: "Code".into(),
            slug: "custom-website-development".into(),
        }
    }

    #[test]
    fn missing_category_uses_fallback_label() {
        let view = ServiceView::new(record(), None);
        assert_eq!(view.category_label, FALLBACK_CATEGORY_LABEL);
        assert!(view.category.is_none());
    }

    #[test]
    fn resolved_category_labels_the_view() {
        let cat = Category { id: 9, name: "Development".into(), slug: "development".into() };
        let view = ServiceView::new(record(), Some(cat));
        assert_eq!(view.category_label, "Development");
    }

    #[test]
    fn decode_sorts_process_by_order() {
        let row = DetailsRow {
            service_id: 1,
            benefits: json!([{"title": "Speed", "description": "Ship fast", "icon": "Zap"}]),
            process: json!([
                {"title": "Build", "description": "b", "order": 2},
                {"title": "Discover", "description": "d", "order": 1},
            ]),
            related_services: json!([4, 5]),
        };
        let d = ServiceDetails::decode(&row);
        assert_eq!(d.benefits.len(), 1);
        assert_eq!(d.process.iter().map(|s| s.order).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(d.related_services, vec![4, 5]);
    }

    #[test]
    fn malformed_columns_decode_empty() {
        let row = DetailsRow {
            service_id: 1,
            benefits: json!({"not": "a list"}),
            process: json!(null),
            related_services: json!(["x"]),
        };
        assert_eq!(ServiceDetails::decode(&row), ServiceDetails::default());
    }

    #[test]
    fn detail_payload_flattens_service_fields() {
        let payload = ServiceWithDetails {
            service: ServiceView::new(record(), None),
            details: None,
            related_services: vec![],
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["slug"], "custom-website-development");
        assert_eq!(v["category_label"], "Service");
        assert!(v["details"].is_null());
    }
}
