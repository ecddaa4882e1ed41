use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::todo::Todo;

const DB_NAME: &str = "todo_db";
const COLLECTION_NAME: &str = "todos";

/// The todo repository: every operation round-trips to the collection, no
/// process-local state is kept.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
}

impl Database {
    /// Connects and pings the deployment so a bad connection string fails
    /// here rather than on the first request.
    pub async fn new(config: &Config) -> mongodb::error::Result<Self> {
        let client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        let client = Client::with_options(client_options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(Self { client })
    }

    /// Returns all todos in storage-native order (unspecified, stable only
    /// within one snapshot). An empty collection yields an empty vec.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let mut cursor = self.todos_collection().find(None, None).await?;
        let mut todos = Vec::new();
        while cursor.advance().await? {
            todos.push(cursor.deserialize_current()?);
        }
        Ok(todos)
    }

    /// Persists a new todo with `completed = false` and returns it carrying
    /// the identifier the storage layer assigned. Only the exact empty
    /// string is rejected; no trimming.
    pub async fn create_todo(&self, body: String) -> Result<Todo, ApiError> {
        if body.is_empty() {
            return Err(ApiError::EmptyBody);
        }
        let todo = Todo {
            id: None,
            completed: false,
            body,
        };
        let result = self.todos_collection().insert_one(&todo, None).await?;
        Ok(Todo {
            id: result.inserted_id.as_object_id(),
            ..todo
        })
    }

    /// Marks the todo completed. This is an unconditional set to `true`, so
    /// repeating it is idempotent.
    pub async fn complete_todo(&self, todo_id: &str) -> Result<(), ApiError> {
        let id = parse_object_id(todo_id)?;
        let result = self
            .todos_collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "completed": true } },
                None,
            )
            .await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_todo(&self, todo_id: &str) -> Result<(), ApiError> {
        let id = parse_object_id(todo_id)?;
        let result = self
            .todos_collection()
            .delete_one(doc! { "_id": id }, None)
            .await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    fn todos_collection(&self) -> Collection<Todo> {
        self.client.database(DB_NAME).collection(COLLECTION_NAME)
    }
}

/// Gate for path identifiers: rejects anything that is not a well-formed
/// ObjectId hex string before storage is contacted.
fn parse_object_id(todo_id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(todo_id).map_err(|_| ApiError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(ApiError::InvalidId)
        ));
        assert!(matches!(parse_object_id(""), Err(ApiError::InvalidId)));
        // Right length, invalid hex.
        assert!(matches!(
            parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(ApiError::InvalidId)
        ));
    }

    #[test]
    fn accepts_well_formed_identifiers() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }
}
