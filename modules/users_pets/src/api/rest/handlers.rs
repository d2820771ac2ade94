use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::rest::dto::{ShowQuery, UserForm};
use crate::api::rest::error::{internal, map_domain_error, user_not_found};
use crate::api::rest::views::{notice_message, Views, NOTICE_CREATED};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Render the empty user creation form
pub async fn new_user(Extension(views): Extension<Arc<Views>>) -> Response {
    html(
        StatusCode::OK,
        views.render_new(&UserForm::default(), None),
        "/users/new",
    )
}

/// Create a user from the submitted form
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<Views>>,
    Form(form): Form<UserForm>,
) -> Response {
    info!("Creating user from form submission");

    match svc.create_user(form.clone().into()).await {
        Ok(user) => {
            Redirect::to(&format!("/users/{}?notice={}", user.id, NOTICE_CREATED)).into_response()
        }
        Err(DomainError::Validation { errors }) => {
            warn!("Rejected user form: {}", errors);
            html(
                StatusCode::UNPROCESSABLE_ENTITY,
                views.render_new(&form, Some(&errors)),
                "/users",
            )
        }
        Err(e) => {
            error!("Failed to create user: {}", e);
            map_domain_error(&e, "/users").into_response()
        }
    }
}

/// Show a user with their pets
pub async fn show_user(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<Views>>,
    Path(raw_id): Path<String>,
    Query(query): Query<ShowQuery>,
) -> Response {
    let instance = format!("/users/{raw_id}");

    let Ok(id) = Uuid::parse_str(&raw_id) else {
        info!("Malformed user id: {}", raw_id);
        return user_not_found(&raw_id, &instance).into_response();
    };

    let loaded = async {
        let user = svc.get_user(id).await?;
        let pets = svc.list_pets(id).await?;
        Ok::<_, DomainError>((user, pets))
    }
    .await;

    match loaded {
        Ok((user, pets)) => {
            let notice = query.notice.as_deref().and_then(notice_message);
            html(
                StatusCode::OK,
                views.render_show(&user, &pets, notice),
                &instance,
            )
        }
        Err(e) => {
            info!("Failed to show user {}: {}", id, e);
            map_domain_error(&e, &instance).into_response()
        }
    }
}

fn html(status: StatusCode, rendered: anyhow::Result<String>, instance: &str) -> Response {
    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            error!("Failed to render view: {:#}", e);
            internal(instance).into_response()
        }
    }
}
