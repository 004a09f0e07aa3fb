use crate::response::envelope::SuccessResponse;

pub async fn home() -> SuccessResponse<serde_json::Value> {
    SuccessResponse::send(serde_json::json!({
        "message": "Welcome to the Kidnance API"
    }))
}
