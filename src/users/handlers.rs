use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    extractors::JsonBody,
    password::hash_password_blocking,
    state::AppState,
    users::{
        dto::{CreateUserRequest, PublicUser},
        repo_types::{User, UserProfile},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:user_id", get(get_user))
}

/// POST /users
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), (StatusCode, String)> {
    let CreateUserRequest {
        user_id,
        name,
        email,
        password,
    } = payload;

    let hash = match hash_password_blocking(password).await {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, %user_id, "hash_password failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".into(),
            ));
        }
    };

    let user = User {
        user_id,
        name,
        email,
        password: hash,
    };
    if let Err(e) = state.db.insert_user(&user).await {
        error!(error = %e, user_id = %user.user_id, "insert user failed");
        return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
    }

    info!(user_id = %user.user_id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(PublicUser::from(UserProfile::from(&user))),
    ))
}

/// GET /users/:user_id
///
/// A missing row and a failed query both answer 404.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    match state.db.find_user(&user_id).await {
        Ok(Some(profile)) => Ok(Json(profile.into())),
        Ok(None) => {
            warn!(%user_id, "user not found");
            Err(not_found())
        }
        Err(e) => {
            error!(error = %e, %user_id, "user lookup failed");
            Err(not_found())
        }
    }
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "User not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serializes_without_password() {
        let user = User {
            user_id: "u1".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: "$argon2id$v=19$...".into(),
        };
        let json = serde_json::to_value(PublicUser::from(UserProfile::from(&user))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userId": "u1", "name": "Alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn stored_user_never_serializes_its_hash() {
        let user = User {
            user_id: "u1".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: "hash".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }
}
