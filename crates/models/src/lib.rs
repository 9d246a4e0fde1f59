pub mod errors;
pub mod db;
pub mod contact_query;

#[cfg(test)]
mod db_tests {
    use migration::MigratorTrait;
    use sea_orm::EntityTrait;

    use crate::{contact_query, db};

    #[tokio::test]
    async fn contact_query_insert_and_read_back() {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("skip: DATABASE_URL not set");
            return;
        }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return;
        }

        let input = contact_query::NewContactQuery {
            name: "Model Test".into(),
            email: "model@example.com".into(),
            mobile: "555".into(),
            message: "stored?".into(),
            status: Some(contact_query::ContactStatus::UnderReview),
        };
        let created = contact_query::create(&db, input).await.expect("create");
        let found = contact_query::Entity::find_by_id(created.id).one(&db).await.expect("find").expect("present");
        assert_eq!(found.status, contact_query::ContactStatus::UnderReview);
        assert_eq!(found.message, "stored?");

        contact_query::Entity::delete_by_id(created.id).exec(&db).await.expect("cleanup");
    }
}
