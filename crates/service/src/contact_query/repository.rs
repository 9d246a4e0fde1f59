use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use models::contact_query::{self, Entity as ContactQueryEntity};

use crate::contact_query::filter::ContactQueryFilter;
use crate::errors::ServiceError;

/// Persistence for contact queries. Each method is a single read or write.
#[async_trait]
pub trait ContactQueryRepository: Send + Sync {
    async fn insert(&self, record: contact_query::Model) -> Result<contact_query::Model, ServiceError>;
    /// Matching rows for one page, newest first, plus the unpaged match count.
    async fn find_page(&self, filter: &ContactQueryFilter, offset: u64, limit: u64) -> Result<(Vec<contact_query::Model>, u64), ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<contact_query::Model>, ServiceError>;
    /// Overwrite the editable fields; `None` when the row no longer exists.
    async fn update(&self, record: contact_query::Model) -> Result<Option<contact_query::Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmContactQueryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContactQueryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ContactQueryRepository for SeaOrmContactQueryRepository {
    async fn insert(&self, record: contact_query::Model) -> Result<contact_query::Model, ServiceError> {
        let am = record.into_insert();
        Ok(am.insert(&self.db).await?)
    }

    async fn find_page(&self, filter: &ContactQueryFilter, offset: u64, limit: u64) -> Result<(Vec<contact_query::Model>, u64), ServiceError> {
        let select = ContactQueryEntity::find().filter(filter.condition());
        let total = select.clone().count(&self.db).await?;
        // Postgres OFFSET is a signed bigint
        let offset = offset.min(i64::MAX as u64);
        if offset >= total {
            return Ok((Vec::new(), total));
        }
        let rows = select
            .order_by_desc(contact_query::Column::CreatedAt)
            .order_by_desc(contact_query::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok((rows, total))
    }

    async fn get(&self, id: Uuid) -> Result<Option<contact_query::Model>, ServiceError> {
        Ok(ContactQueryEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn update(&self, record: contact_query::Model) -> Result<Option<contact_query::Model>, ServiceError> {
        let am = contact_query::ActiveModel {
            id: Unchanged(record.id),
            name: Set(record.name),
            email: Set(record.email),
            mobile: Set(record.mobile),
            message: Set(record.message),
            status: Set(record.status),
            created_at: NotSet,
        };
        match am.update(&self.db).await {
            Ok(m) => Ok(Some(m)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = ContactQueryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory repository for tests and for running without a database.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MemoryContactQueryRepository {
        rows: RwLock<HashMap<Uuid, contact_query::Model>>,
    }

    impl MemoryContactQueryRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.rows.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.rows.read().await.is_empty() }
    }

    #[async_trait]
    impl ContactQueryRepository for MemoryContactQueryRepository {
        async fn insert(&self, record: contact_query::Model) -> Result<contact_query::Model, ServiceError> {
            let mut rows = self.rows.write().await;
            if rows.contains_key(&record.id) {
                return Err(ServiceError::Db(format!("duplicate key {}", record.id)));
            }
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn find_page(&self, filter: &ContactQueryFilter, offset: u64, limit: u64) -> Result<(Vec<contact_query::Model>, u64), ServiceError> {
            let rows = self.rows.read().await;
            let mut matched: Vec<&contact_query::Model> = rows.values().filter(|m| filter.matches(m)).collect();
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
            let total = matched.len() as u64;
            let page = matched
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect();
            Ok((page, total))
        }

        async fn get(&self, id: Uuid) -> Result<Option<contact_query::Model>, ServiceError> {
            Ok(self.rows.read().await.get(&id).cloned())
        }

        async fn update(&self, record: contact_query::Model) -> Result<Option<contact_query::Model>, ServiceError> {
            let mut rows = self.rows.write().await;
            let Some(existing) = rows.get_mut(&record.id) else { return Ok(None); };
            existing.name = record.name;
            existing.email = record.email;
            existing.mobile = record.mobile;
            existing.message = record.message;
            existing.status = record.status;
            Ok(Some(existing.clone()))
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows.write().await.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MemoryContactQueryRepository;
    use super::*;
    use crate::test_support::get_db;
    use models::contact_query::{ContactStatus, NewContactQuery};

    fn record(name: &str) -> contact_query::Model {
        NewContactQuery {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "123".into(),
            message: "hello".into(),
            status: None,
        }
        .into_model()
        .unwrap()
    }

    #[tokio::test]
    async fn memory_update_never_touches_created_at() {
        let repo = MemoryContactQueryRepository::new();
        let r = repo.insert(record("Ann")).await.unwrap();
        let mut changed = r.clone();
        changed.created_at = (chrono::Utc::now() + chrono::Duration::days(1)).into();
        changed.status = ContactStatus::Solved;
        let updated = repo.update(changed).await.unwrap().unwrap();
        assert_eq!(updated.created_at, r.created_at);
        assert_eq!(updated.status, ContactStatus::Solved);
    }

    #[tokio::test]
    async fn memory_rejects_duplicate_ids() {
        let repo = MemoryContactQueryRepository::new();
        let r = record("Ann");
        repo.insert(r.clone()).await.unwrap();
        assert!(matches!(repo.insert(r).await, Err(ServiceError::Db(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn memory_update_and_delete_of_missing_row() {
        let repo = MemoryContactQueryRepository::new();
        assert!(repo.update(record("Ghost")).await.unwrap().is_none());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let repo = SeaOrmContactQueryRepository::new(db);

        let marker = format!("repo-{}", Uuid::new_v4());
        let created = repo.insert(record(&marker)).await?;
        let found = repo.get(created.id).await?.expect("inserted row");
        assert_eq!(found.name, marker);

        let filter = ContactQueryFilter::new(Some(&marker.to_uppercase()), None)?;
        let (rows, total) = repo.find_page(&filter, 0, 10).await?;
        assert_eq!(total, 1);
        assert_eq!(rows[0].id, created.id);

        let mut next = found.clone();
        next.status = ContactStatus::UnderReview;
        let updated = repo.update(next).await?.expect("row exists");
        assert_eq!(updated.status, ContactStatus::UnderReview);
        assert_eq!(updated.created_at, found.created_at);

        assert!(repo.delete(created.id).await?);
        assert!(repo.get(created.id).await?.is_none());
        assert!(repo.update(updated).await?.is_none());
        Ok(())
    }
}
