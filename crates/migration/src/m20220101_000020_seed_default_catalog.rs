//! Seed the default catalog: two categories and the services the site
//! launched with. Rows whose slug already exists are left untouched, so
//! content edited by the admin tooling survives re-runs.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (name, slug)
const CATEGORIES: &[(&str, &str)] = &[
    ("Consulting", "consulting"),
    ("Development", "development"),
];

/// (title, description, category slug, icon, slug)
const SERVICES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Custom Website Development",
        "Build modern, responsive websites tailored to each client's unique brand and business needs.",
        "development",
        "Code",
        "custom-website-development",
    ),
    (
        "E-Commerce Solutions",
        "Develop full-featured online stores with secure payment integration, inventory management, and smooth user experiences.",
        "development",
        "ShoppingCart",
        "e-commerce-solutions",
    ),
    (
        "Interactive Web Applications",
        "Create dynamic and engaging web apps, from interactive dashboards to custom client portals, that drive user engagement.",
        "development",
        "Layers",
        "interactive-web-applications",
    ),
    (
        "Business Platform Automations",
        "Design end-to-end systems, like automated lead generation for wholesale real estate, to streamline business processes.",
        "development",
        "Cog",
        "business-platform-automations",
    ),
    (
        "AI & Machine Learning Integration",
        "Incorporate intelligent features such as chatbots, recommendation engines, and predictive analytics to enhance decision-making.",
        "development",
        "Brain",
        "ai-machine-learning-integration",
    ),
    (
        "SEO & Digital Marketing Optimization",
        "Optimize metadata, implement structured data, and fine-tune web performance to improve search rankings and drive organic traffic.",
        "consulting",
        "Search",
        "seo-digital-marketing-optimization",
    ),
    (
        "Digital Transformation Consulting",
        "Provide strategic guidance and customized solutions to help local businesses leverage modern web and AI technologies.",
        "consulting",
        "Lightbulb",
        "digital-transformation-consulting",
    ),
];

fn category_insert() -> InsertStatement {
    let mut stmt = Query::insert();
    stmt.into_table(ServiceCategories::Table)
        .columns([ServiceCategories::Name, ServiceCategories::Slug])
        .on_conflict(OnConflict::column(ServiceCategories::Slug).do_nothing().to_owned());
    for (name, slug) in CATEGORIES {
        stmt.values_panic([(*name).into(), (*slug).into()]);
    }
    stmt
}

/// `(SELECT id FROM service_categories WHERE slug = $1)`
fn category_id_of(slug: &str) -> SimpleExpr {
    let select = Query::select()
        .column(ServiceCategories::Id)
        .from(ServiceCategories::Table)
        .and_where(Expr::col(ServiceCategories::Slug).eq(slug))
        .to_owned();
    SimpleExpr::SubQuery(None, Box::new(select.into_sub_query_statement()))
}

fn service_insert() -> InsertStatement {
    let mut stmt = Query::insert();
    stmt.into_table(Services::Table)
        .columns([
            Services::Title,
            Services::Description,
            Services::CategoryId,
            Services::Icon,
            Services::Slug,
        ])
        .on_conflict(OnConflict::column(Services::Slug).do_nothing().to_owned());
    for (title, description, category, icon, slug) in SERVICES {
        stmt.values_panic([
            (*title).into(),
            (*description).into(),
            category_id_of(category),
            (*icon).into(),
            (*slug).into(),
        ]);
    }
    stmt
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.exec_stmt(category_insert()).await?;
        manager.exec_stmt(service_insert()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Services::Table)
                    .and_where(Expr::col(Services::Slug).is_in(SERVICES.iter().map(|s| s.4)))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ServiceCategories::Table)
                    .and_where(Expr::col(ServiceCategories::Slug).is_in(CATEGORIES.iter().map(|c| c.1)))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceCategories { Table, Id, Name, Slug }

#[derive(DeriveIden)]
enum Services { Table, Title, Description, CategoryId, Icon, Slug }
