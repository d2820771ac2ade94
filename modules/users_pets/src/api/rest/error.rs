use axum::http::StatusCode;

use crate::api::rest::problem::{Problem, ProblemResponse};
use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance);

    let problem = if let Some(id) = tracing::Span::current().id() {
        problem.with_trace_id(id.into_u64().to_string())
    } else {
        problem
    };

    ProblemResponse(problem)
}

pub fn user_not_found(id: impl std::fmt::Display, instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::NOT_FOUND,
        "USERS_NOT_FOUND",
        "User not found",
        format!("User with id {} was not found", id),
        instance,
    )
}

pub fn internal(instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL",
        "Internal error",
        "An internal error occurred",
        instance,
    )
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::UserNotFound { id } => user_not_found(id, instance),
        DomainError::Validation { errors } => from_parts(
            StatusCode::UNPROCESSABLE_ENTITY,
            "USERS_VALIDATION",
            "Validation error",
            errors.to_string(),
            instance,
        ),
        DomainError::CantWalkWithoutPets { id } => from_parts(
            StatusCode::CONFLICT,
            "USERS_CANT_WALK_WITHOUT_PETS",
            "Can't walk without pets",
            format!("User {} has no pets to walk", id),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
