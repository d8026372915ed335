use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

/// The closed set of accepted food types.
///
/// Used purely as a validation gate on the `{food_type}` path segment:
/// any other value fails path deserialization and never reaches the
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Indian,
    Chinese,
    Italian,
    American,
}

#[derive(Debug, Serialize)]
pub struct FoodReply {
    pub food_type: FoodType,
}

/// `GET /foods/{food_type}` — echoes the validated food type back.
pub async fn get_food(Path(food_type): Path<FoodType>) -> Json<FoodReply> {
    Json(FoodReply { food_type })
}
