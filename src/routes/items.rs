use axum::extract::Path;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ItemReply {
    pub item_id: i64,
}

/// `GET /items/{item_id}` — echoes the integer-coerced id back.
pub async fn read_item(Path(item_id): Path<i64>) -> Json<ItemReply> {
    Json(ItemReply { item_id })
}
