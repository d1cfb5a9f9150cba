//! PostgreSQL repository tests. They need a reachable server:
//!
//! `DATABASE_URL=postgres://localhost/contacts_test cargo test -- --ignored`

use contacts_api::{ensure_database_exists, ensure_schema, ContactRepository, NewContact, PgContactRepository};
use sqlx::postgres::PgPoolOptions;

async fn repo() -> PgContactRepository {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/contacts_test".into());
    ensure_database_exists(&url).await.unwrap();
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    PgContactRepository::new(pool)
}

fn ana() -> NewContact {
    NewContact {
        first_name: "Ana".into(),
        last_name: "Martínez".into(),
        phone: Some("1112223333".into()),
        email: Some("ana@test.com".into()),
    }
}

#[tokio::test]
#[ignore]
async fn schema_creation_is_idempotent() {
    let repo = repo().await;
    ensure_schema(repo.pool()).await.unwrap();
    repo.ping().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn insert_get_update_delete() {
    let repo = repo().await;
    let created = repo.insert(ana()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(repo.get(created.id).await.unwrap(), Some(created.clone()));

    let mut changed = ana();
    changed.phone = None;
    changed.first_name = "Ana María".into();
    let updated = repo.update(created.id, changed).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Ana María");
    assert!(updated.phone.is_none());

    let listed = repo.list_all().await.unwrap();
    assert!(listed.iter().any(|c| c.id == created.id));

    assert_eq!(repo.delete(created.id).await.unwrap(), Some(updated));
    assert!(repo.get(created.id).await.unwrap().is_none());
    assert!(repo.delete(created.id).await.unwrap().is_none());
    assert!(repo.update(created.id, ana()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn ids_keep_increasing_after_delete() {
    let repo = repo().await;
    let first = repo.insert(ana()).await.unwrap();
    repo.delete(first.id).await.unwrap();
    let second = repo.insert(ana()).await.unwrap();
    assert!(second.id > first.id);
    repo.delete(second.id).await.unwrap();
}
