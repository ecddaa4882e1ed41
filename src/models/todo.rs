use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A todo document as persisted in the collection. `_id` is assigned by the
/// storage layer on insert and omitted while unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub completed: bool,
    pub body: String,
}

/// API-boundary shape of a todo: the identifier is an opaque hex string so
/// clients never see the storage-native id type.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: Option<String>,
    pub completed: bool,
    pub body: String,
}

impl From<&Todo> for TodoDto {
    fn from(value: &Todo) -> Self {
        Self {
            id: value.id.map(|id| id.to_hex()),
            completed: value.completed,
            body: value.body.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
