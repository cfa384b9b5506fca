use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A lead that passed validation and is ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().chars().count() < 2 {
        return Err(errors::ModelError::Validation(NAME_TOO_SHORT.into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !is_valid_email(email) {
        return Err(errors::ModelError::Validation(INVALID_EMAIL.into()));
    }
    Ok(())
}

/// Structural check: `local@domain.tld`, no whitespace, sane label shapes.
fn is_valid_email(email: &str) -> bool {
    if email.len() > 320 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else { return false };
    if domain.contains('@') {
        return false;
    }
    if local.is_empty() || local.len() > 64 || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if !local.chars().all(is_local_part_char) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|l| {
        !l.is_empty()
            && !l.starts_with('-')
            && !l.ends_with('-')
            && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.')
}

/// Insert a lead with a server-generated id and the caller's submission time.
pub async fn create(db: &DatabaseConnection, lead: NewLead, created_at: DateTime<Utc>) -> Result<Model, errors::ModelError> {
    validate_name(&lead.name)?;
    validate_email(&lead.email)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(lead.name),
        email: Set(lead.email),
        phone: Set(lead.phone),
        company: Set(lead.company),
        message: Set(lead.message),
        created_at: Set(created_at.into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
