use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub name: String, pub slug: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
    pub category: Option<CategoryDoc>,
    /// Category name, or "Service" when the category is missing.
    pub category_label: String,
}

#[derive(ToSchema)]
pub struct BenefitDoc { pub title: String, pub description: String, pub icon: String }

#[derive(ToSchema)]
pub struct ProcessStepDoc { pub title: String, pub description: String, pub order: i32 }

#[derive(ToSchema)]
pub struct DetailsDoc {
    pub benefits: Vec<BenefitDoc>,
    pub process: Vec<ProcessStepDoc>,
    pub related_services: Vec<i32>,
}

#[derive(ToSchema)]
pub struct ServiceDetailDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
    pub category: Option<CategoryDoc>,
    pub category_label: String,
    pub details: Option<DetailsDoc>,
    pub related_services: Vec<ServiceDoc>,
}

#[derive(ToSchema)]
pub struct NavigationEntryDoc { pub category: CategoryDoc, pub services: Vec<ServiceDoc> }

#[derive(ToSchema)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct LeadResponse { pub success: bool, pub message: String, pub errors: Option<Vec<FieldErrorDoc>> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::content::list_services,
        crate::routes::content::get_service,
        crate::routes::content::list_categories,
        crate::routes::content::get_category,
        crate::routes::content::navigation,
        crate::routes::leads::submit,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CategoryDoc,
            ServiceDoc,
            BenefitDoc,
            ProcessStepDoc,
            DetailsDoc,
            ServiceDetailDoc,
            NavigationEntryDoc,
            LeadRequest,
            FieldErrorDoc,
            LeadResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "leads")
    )
)]
pub struct ApiDoc;
