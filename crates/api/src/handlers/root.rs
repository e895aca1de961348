use axum::Json;

use crate::response::MessageResponse;

/// GET /
pub async fn greet() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello there!",
    })
}
