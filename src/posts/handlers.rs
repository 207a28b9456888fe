use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};

use crate::{
    extractors::JsonBody,
    posts::{
        dto::CreatePostRequest,
        repo_types::{NewPost, Post},
    },
    state::AppState,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id", get(get_post))
        .route("/posts/users/:user_id", get(list_user_posts))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/posts", post(create_post))
}

// --- handlers ---

/// POST /posts
#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), (StatusCode, String)> {
    let new = NewPost {
        caption: payload.caption,
        image_url: payload.image_url,
        posted_at: OffsetDateTime::now_utc(),
        user_id: payload.user_id,
    };

    let post = state.db.insert_post(&new).await.map_err(|e| {
        error!(error = %e, user_id = %new.user_id, "insert post failed");
        internal(e)
    })?;

    info!(post_id = post.post_id, user_id = %post.user_id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts/:post_id
///
/// Non-numeric ids, missing rows and failed queries all answer 404.
#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, (StatusCode, String)> {
    let Ok(post_id) = raw_id.parse::<i64>() else {
        warn!(%raw_id, "non-numeric post id");
        return Err(not_found());
    };

    match state.db.find_post(post_id).await {
        Ok(Some(post)) => Ok(Json(post)),
        Ok(None) => {
            warn!(post_id, "post not found");
            Err(not_found())
        }
        Err(e) => {
            error!(error = %e, post_id, "post lookup failed");
            Err(not_found())
        }
    }
}

/// GET /posts/users/:user_id
#[instrument(skip(state))]
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Post>>, (StatusCode, String)> {
    let posts = state.db.list_posts_by_user(&user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "list posts failed");
        internal(e)
    })?;
    Ok(Json(posts))
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Post not found".into())
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn post_wire_format_uses_original_field_names() {
        let post = Post {
            post_id: 7,
            caption: "sunset".into(),
            image_url: "https://img.example/7.jpg".into(),
            posted_at: datetime!(2024-05-01 12:30:00 UTC),
            user_id: "u1".into(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "postId": 7,
                "caption": "sunset",
                "image_url": "https://img.example/7.jpg",
                "posted_at": "2024-05-01T12:30:00Z",
                "userId": "u1",
            })
        );
    }

    #[test]
    fn create_request_ignores_client_timestamp_and_id() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"postId":99,"caption":"c","image_url":"i","posted_at":"1999-01-01T00:00:00Z","userId":"u1"}"#,
        )
        .unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.caption, "c");
    }
}
