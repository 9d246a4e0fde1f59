use std::fmt;

use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Review state of a submitted query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ContactStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    #[serde(rename = "pending")]
    Pending,
    #[sea_orm(string_value = "under review")]
    #[serde(rename = "under review")]
    UnderReview,
    #[sea_orm(string_value = "solved")]
    #[serde(rename = "solved")]
    Solved,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [ContactStatus::Pending, ContactStatus::UnderReview, ContactStatus::Solved];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::UnderReview => "under review",
            ContactStatus::Solved => "solved",
        }
    }

    /// Exact match on the wire value; no case folding.
    pub fn parse(s: &str) -> Result<Self, errors::ModelError> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| errors::ModelError::Validation(format!(
                "invalid status '{}': expected one of pending, under review, solved",
                s
            )))
    }

    pub fn is_terminal(&self) -> bool { matches!(self, ContactStatus::Solved) }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_query")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields searched by the free-text filter.
pub const SEARCHABLE: [Column; 4] = [Column::Name, Column::Email, Column::Mobile, Column::Message];

pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{} required", field)));
    }
    Ok(())
}

/// Input for a new record; `status` falls back to `pending`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewContactQuery {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub status: Option<ContactStatus>,
}

impl NewContactQuery {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("mobile", &self.mobile)?;
        validate_required("message", &self.message)?;
        Ok(())
    }

    /// Validate and materialize with a fresh id and creation time.
    pub fn into_model(self) -> Result<Model, errors::ModelError> {
        self.validate()?;
        Ok(Model {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            message: self.message,
            status: self.status.unwrap_or_default(),
            created_at: Utc::now().into(),
        })
    }
}

impl Model {
    /// Re-check the constraints that must hold after any mutation.
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("mobile", &self.mobile)?;
        validate_required("message", &self.message)?;
        Ok(())
    }
}

impl Model {
    /// Active model with every column `Set`, for a fresh INSERT.
    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            email: Set(self.email),
            mobile: Set(self.mobile),
            message: Set(self.message),
            status: Set(self.status),
            created_at: Set(self.created_at),
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: NewContactQuery) -> Result<Model, errors::ModelError> {
    let m = input.into_model()?;
    m.into_insert().insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> NewContactQuery {
        NewContactQuery {
            name: "Bob".into(),
            email: "b@x.com".into(),
            mobile: "123".into(),
            message: "Hi".into(),
            status: None,
        }
    }

    #[test]
    fn status_wire_values_are_exact() {
        assert_eq!(ContactStatus::parse("pending").unwrap(), ContactStatus::Pending);
        assert_eq!(ContactStatus::parse("under review").unwrap(), ContactStatus::UnderReview);
        assert_eq!(ContactStatus::parse("solved").unwrap(), ContactStatus::Solved);
        assert!(ContactStatus::parse("closed").is_err());
        assert!(ContactStatus::parse("Solved").is_err());
        assert!(ContactStatus::parse("under_review").is_err());
    }

    #[test]
    fn status_serializes_with_space() {
        let json = serde_json::to_string(&ContactStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under review\"");
        let back: ContactStatus = serde_json::from_str("\"solved\"").unwrap();
        assert_eq!(back, ContactStatus::Solved);
        assert!(ContactStatus::Solved.is_terminal());
        assert!(!ContactStatus::Pending.is_terminal());
    }

    #[test]
    fn new_record_defaults_to_pending() {
        let m = bob().into_model().unwrap();
        assert_eq!(m.status, ContactStatus::Pending);
        assert_eq!(m.name, "Bob");
        assert!(m.created_at <= Utc::now());
    }

    #[test]
    fn new_record_keeps_supplied_status() {
        let mut input = bob();
        input.status = Some(ContactStatus::UnderReview);
        assert_eq!(input.into_model().unwrap().status, ContactStatus::UnderReview);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        for field in ["name", "email", "mobile", "message"] {
            let mut input = bob();
            match field {
                "name" => input.name = "  ".into(),
                "email" => input.email = String::new(),
                "mobile" => input.mobile = "\t".into(),
                _ => input.message = String::new(),
            }
            let err = input.into_model().unwrap_err();
            assert!(err.to_string().contains(field), "{err}");
        }
    }

    #[test]
    fn insert_model_sets_every_column() {
        let m = bob().into_model().unwrap();
        let am = m.clone().into_insert();
        assert!(matches!(am.id, sea_orm::ActiveValue::Set(id) if id == m.id));
        assert!(matches!(am.created_at, sea_orm::ActiveValue::Set(at) if at == m.created_at));
        assert!(matches!(am.status, sea_orm::ActiveValue::Set(ContactStatus::Pending)));
        assert!(am.name.is_set() && am.email.is_set() && am.mobile.is_set() && am.message.is_set());
    }

    #[test]
    fn ids_are_unique() {
        let a = bob().into_model().unwrap();
        let b = bob().into_model().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn model_json_uses_camel_case_created_at() {
        let m = bob().into_model().unwrap();
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("created_at").is_none());
        assert_eq!(v["status"], "pending");
    }
}
