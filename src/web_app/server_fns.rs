// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real implementation on the server and an
// HTTP stub on the client, so this file is compiled for BOTH ssr and hydrate.
// Error messages set here are the body text the admin page shows in toasts.

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use sqlx::PgPool;
    use leptos_actix::extract;
    use crate::web_app::api::db;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Database pool not available"))
}

/// The message a server function failed with, without transport decoration.
pub fn server_error_text(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Every standard answer, ordered by id
#[server(ListStandardAnswers, "/api")]
pub async fn list_standard_answers() -> Result<Vec<StandardAnswer>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    let answers = queries::fetch_standard_answers(&pool).await;

    match &answers {
        Ok(list) => tracing::info!("Listed {} standard answers", list.len()),
        Err(e) => tracing::error!("Listing standard answers failed: {}", e),
    }

    answers.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Delete one standard answer by id
#[server(DeleteStandardAnswer, "/api")]
pub async fn delete_standard_answer(id: i32) -> Result<(), ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Delete request for standard answer {}", id);
    let pool = pool().await?;

    queries::remove_standard_answer(&pool, id).await.map_err(|e| {
        tracing::warn!("Delete of standard answer {} failed: {}", id, e);
        ServerFnError::new(e.to_string())
    })
}

#[server(GetStandardAnswer, "/api")]
pub async fn get_standard_answer(id: i32) -> Result<StandardAnswer, ServerFnError> {
    use crate::web_app::api::queries::{self, StoreError};

    let pool = pool().await?;
    queries::fetch_standard_answer(&pool, id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .ok_or_else(|| ServerFnError::new(StoreError::NotFound(id).to_string()))
}

#[server(CreateStandardAnswer, "/api")]
pub async fn create_standard_answer(
    request: StandardAnswerRequest,
) -> Result<StandardAnswer, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Create request for keyword '{}'", request.keyword);
    let pool = pool().await?;

    queries::insert_standard_answer(&pool, &request).await.map_err(|e| {
        tracing::warn!("Create failed: {}", e);
        ServerFnError::new(e.to_string())
    })
}

#[server(UpdateStandardAnswer, "/api")]
pub async fn update_standard_answer(
    id: i32,
    request: StandardAnswerRequest,
) -> Result<StandardAnswer, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Update request for standard answer {}", id);
    let pool = pool().await?;

    queries::update_standard_answer(&pool, id, &request).await.map_err(|e| {
        tracing::warn!("Update of standard answer {} failed: {}", id, e);
        ServerFnError::new(e.to_string())
    })
}

#[server(ListStandardAnswerCategories, "/api")]
pub async fn list_standard_answer_categories() -> Result<Vec<StandardAnswerCategory>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::fetch_standard_answer_categories(&pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(CreateStandardAnswerCategory, "/api")]
pub async fn create_standard_answer_category(
    name: String,
) -> Result<StandardAnswerCategory, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::insert_standard_answer_category(&pool, &name)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(UpdateStandardAnswerCategory, "/api")]
pub async fn update_standard_answer_category(
    id: i32,
    name: String,
) -> Result<StandardAnswerCategory, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::update_standard_answer_category(&pool, id, &name)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_text_strips_prefix() {
        let error = ServerFnError::new("No standard answer with id 3");
        assert_eq!(server_error_text(&error), "No standard answer with id 3");
    }

    #[test]
    fn test_server_error_text_other_variants() {
        let error: ServerFnError = ServerFnError::Request("connection reset".to_string());
        assert!(server_error_text(&error).contains("connection reset"));
    }

    #[test]
    fn test_request_serialization() {
        let request = StandardAnswerRequest {
            keyword: "vpn".to_string(),
            answer: "Use the portal".to_string(),
            categories: vec![1, 2],
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: StandardAnswerRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
