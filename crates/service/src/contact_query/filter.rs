use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition};

use models::contact_query::{self, ContactStatus, SEARCHABLE};

use crate::errors::ServiceError;

/// Free-text search plus optional exact status match, combined with AND.
///
/// Search is a case-insensitive literal substring test against name, email,
/// mobile and message; a record matches when any of the four contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQueryFilter {
    search: Option<String>,
    status: Option<ContactStatus>,
}

impl ContactQueryFilter {
    /// Search is trimmed; blank values count as absent. An unknown status is a
    /// validation error.
    pub fn new(search: Option<&str>, status: Option<&str>) -> Result<Self, ServiceError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase);
        let status = status
            .filter(|s| !s.is_empty())
            .map(ContactStatus::parse)
            .transpose()?;
        Ok(Self { search, status })
    }

    /// In-process evaluation, kept equivalent to [`Self::condition`].
    pub fn matches(&self, m: &contact_query::Model) -> bool {
        if let Some(st) = self.status {
            if m.status != st { return false; }
        }
        match &self.search {
            None => true,
            Some(needle) => [&m.name, &m.email, &m.mobile, &m.message]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }

    /// SQL condition for the same predicate.
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(needle) = &self.search {
            let pattern = format!("%{}%", escape_like(needle));
            let mut any = Condition::any();
            for col in SEARCHABLE {
                any = any.add(
                    Expr::expr(Func::lower(Expr::col(col)))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                );
            }
            cond = cond.add(any);
        }
        if let Some(st) = self.status {
            cond = cond.add(contact_query::Column::Status.eq(st));
        }
        cond
    }
}

/// Escape LIKE metacharacters so the needle matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') { out.push('\\'); }
        out.push(c);
    }
    out
}
