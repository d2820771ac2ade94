use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::{handlers, views::Views};
use crate::domain::service::Service;

pub fn register_routes(router: Router, service: Arc<Service>, views: Arc<Views>) -> Router {
    router
        // GET / and GET /users/new - Empty creation form
        .route("/", get(handlers::new_user))
        .route("/users/new", get(handlers::new_user))
        // POST /users - Create a user from form fields
        .route("/users", post(handlers::create_user))
        // GET /users/{id} - Show a user and their pets
        .route("/users/{id}", get(handlers::show_user))
        .layer(Extension(service))
        .layer(Extension(views))
}
