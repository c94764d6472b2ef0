use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::entry::Entry;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /UPDATE_TODO_BY_ID/{name}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub new_name: Option<String>,
    pub new_priority: Option<String>,
}

impl UpdateTodo {
    fn into_entry(self) -> Result<Entry, ApiError> {
        match (self.new_name, self.new_priority) {
            (Some(name), Some(priority)) if !name.is_empty() => Ok(Entry::new(name, priority)),
            _ => Err(ApiError::validation(
                "Please provide both new name and new priority.",
            )),
        }
    }
}

/// POST /UPDATE_TODO_BY_ID/{name}
///
/// 200 with the updated entry, 400 on missing fields, 404 when the name
/// resolves in neither the list nor the worksheet, 500 on persist failure.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateTodo>,
) -> Result<Json<Entry>, ApiError> {
    info!("POST /UPDATE_TODO_BY_ID/{} endpoint hit", name);
    let entry = body.into_entry()?;
    let updated = state.update(&name, entry).await?;
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_entry_success() {
        let body = UpdateTodo {
            new_name: Some("Buy bread".to_string()),
            new_priority: Some("Low".to_string()),
        };
        assert_eq!(body.into_entry().unwrap(), Entry::new("Buy bread", "Low"));
    }

    #[test]
    fn test_into_entry_missing_fields() {
        let body = UpdateTodo {
            new_name: Some("Buy bread".to_string()),
            new_priority: None,
        };
        assert!(body.into_entry().is_err());
    }

    #[test]
    fn test_body_accepts_camel_case_keys() {
        let body: UpdateTodo =
            serde_json::from_str(r#"{"newName": "Buy bread", "newPriority": "Low"}"#).unwrap();
        assert_eq!(body.new_name.as_deref(), Some("Buy bread"));
        assert_eq!(body.new_priority.as_deref(), Some("Low"));
    }

    #[tokio::test]
    async fn test_update_todo_success() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::initialize(&dir.path().join("todolist.xlsx"));
        state.add(Entry::new("Buy milk", "High")).await.unwrap();

        let body = UpdateTodo {
            new_name: Some("Buy bread".to_string()),
            new_priority: Some("Low".to_string()),
        };
        let Json(updated) = update_todo(
            State(state.clone()),
            Path("Buy milk".to_string()),
            Json(body),
        )
        .await
        .unwrap();

        assert_eq!(updated, Entry::new("Buy bread", "Low"));
        assert_eq!(state.list().await, vec![Entry::new("Buy bread", "Low")]);
    }

    #[tokio::test]
    async fn test_update_todo_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::initialize(&dir.path().join("todolist.xlsx"));

        let body = UpdateTodo {
            new_name: Some("x".to_string()),
            new_priority: Some("Low".to_string()),
        };
        let err = update_todo(State(state), Path("missing".to_string()), Json(body))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
