//! PostgreSQL backend: `contacts` table DDL, database bootstrap, and CRUD.

use super::ContactRepository;
use crate::error::AppError;
use crate::model::{Contact, NewContact};
use crate::service::validation::{EMAIL_MAX, FIRST_NAME_MAX, LAST_NAME_MAX, PHONE_MAX};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const CONTACTS_TABLE: &str = "contacts";

const CONTACT_COLUMNS: &str = "id, first_name, last_name, phone, email";

/// Create the `contacts` table if it does not exist. No migration chain: an
/// existing table is left as it is.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR({}) NOT NULL,
            last_name VARCHAR({}) NOT NULL,
            phone VARCHAR({}),
            email VARCHAR({})
        )
        "#,
        CONTACTS_TABLE, FIRST_NAME_MAX, LAST_NAME_MAX, PHONE_MAX, EMAIL_MAX
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!(table = CONTACTS_TABLE, "schema ensured");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = url.get(scheme_end..).unwrap_or("");
    // Userinfo may hold unencoded '/'; the host starts after its last '@'.
    let before_query = rest.split('?').next().unwrap_or("");
    let host_start = before_query.rfind('@').map(|i| i + 1).unwrap_or(0);
    let path_start = before_query
        .get(host_start..)
        .and_then(|host| host.find('/'))
        .map(|i| scheme_end + host_start + i + 1)
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Contact repository over a shared connection pool.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", CONTACT_COLUMNS, CONTACTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Contact>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", CONTACT_COLUMNS, CONTACTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, new: NewContact) -> Result<Contact, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, phone, email) VALUES ($1, $2, $3, $4) RETURNING {}",
            CONTACTS_TABLE, CONTACT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(new.first_name)
            .bind(new.last_name)
            .bind(new.phone)
            .bind(new.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, new: NewContact) -> Result<Option<Contact>, AppError> {
        let sql = format!(
            "UPDATE {} SET first_name = $1, last_name = $2, phone = $3, email = $4 WHERE id = $5 RETURNING {}",
            CONTACTS_TABLE, CONTACT_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(new.first_name)
            .bind(new.last_name)
            .bind(new.phone)
            .bind(new.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", CONTACTS_TABLE, CONTACT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
