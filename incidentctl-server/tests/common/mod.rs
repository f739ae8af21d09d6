//! Shared fixtures: a temporary SQLite database behind the real router

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use incidentctl_server::{build_router, create_pool, AppState, IncidentRepo, ServerConfig, Session};
use sqlx::AnyPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    // keeps the database file alive
    _dir: TempDir,
    pub pool: AnyPool,
    pub router: Router,
}

/// Row to seed; unspecified columns stay NULL
#[derive(Default)]
pub struct Seed<'a> {
    pub id: i32,
    pub incident_id: &'a str,
    pub kind: Option<&'a str>,
    pub alarm: Option<i32>,
    pub enroute_time: Option<&'a str>,
    pub arrive_time: Option<&'a str>,
    pub address: Option<&'a str>,
    pub apparatus: Option<&'a str>,
    pub total: Option<i32>,
    pub scan_date: Option<&'a str>,
    pub created_at: Option<&'a str>,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("incidents.db").display());
        let pool = create_pool(&url).await.expect("pool");

        let mut session = Session::acquire(&pool).await.expect("session");
        IncidentRepo::new(&mut session)
            .ensure_table()
            .await
            .expect("create table");
        drop(session);

        let router = build_router(AppState { pool: pool.clone() }, &ServerConfig::default());
        Self {
            _dir: dir,
            pool,
            router,
        }
    }

    pub async fn insert(&self, seed: Seed<'_>) {
        sqlx::query(
            r#"INSERT INTO "Incidents"
               (id, incident_id, type, alarm, enroute_time, arrive_time,
                address, apparatus, total, scan_date, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"#,
        )
        .bind(seed.id)
        .bind(seed.incident_id)
        .bind(seed.kind)
        .bind(seed.alarm)
        .bind(seed.enroute_time)
        .bind(seed.arrive_time)
        .bind(seed.address)
        .bind(seed.apparatus)
        .bind(seed.total)
        .bind(seed.scan_date)
        .bind(seed.created_at)
        .execute(&self.pool)
        .await
        .expect("insert");
    }

    /// Insert rows that only carry an address
    pub async fn insert_addresses(&self, addresses: &[&str]) {
        for (i, address) in addresses.iter().enumerate() {
            let id = i as i32 + 1;
            let incident_id = format!("F-{}", id);
            self.insert(Seed {
                id,
                incident_id: &incident_id,
                address: Some(address),
                ..Default::default()
            })
            .await;
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }
}
