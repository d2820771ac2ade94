#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Response, Router};
use sea_orm::{Database, DatabaseConnection};

use users_pets::contract::model::NewUser;
use users_pets::domain::service::Service;
use users_pets::UsersPets;

/// Fresh in-memory database with both migrations applied
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    UsersPets::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn create_test_module() -> (UsersPets, DatabaseConnection) {
    let db = create_test_db().await;
    let module = UsersPets::new(db.clone()).expect("Failed to wire users_pets");
    (module, db)
}

pub async fn create_test_service() -> Arc<Service> {
    create_test_module().await.0.service()
}

/// Module routes behind the real ingress middleware
pub async fn create_test_router() -> Router {
    let (module, _db) = create_test_module().await;
    api_ingress::ApiIngress::default().build_router(module.register_rest(Router::new()))
}

pub fn new_user(first_name: &str, last_name: Option<&str>, email: &str) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.map(str::to_string),
        email: email.to_string(),
    }
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
