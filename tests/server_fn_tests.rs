// tests/server_fn_tests.rs
// Server functions called directly on the server side, backed by a test schema.
//
// The pool override is process-wide, so everything runs inside one test.

mod common;

use common::with_test_db;
use standard_answers::web_app::api::db;
use standard_answers::web_app::model::*;
use standard_answers::web_app::popup::delete_popup;
use standard_answers::web_app::server_fns::*;

#[tokio::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    with_test_db("server_fns_comprehensive", |pool| async move {
        db::set_test_pool(pool.clone());

        // 1. Empty list
        let answers = list_standard_answers()
            .await
            .map_err(|e| anyhow::anyhow!("list_standard_answers failed: {}", e))?;
        assert!(answers.is_empty());

        // 2. Categories
        let billing = create_standard_answer_category("Billing".to_string())
            .await
            .map_err(|e| anyhow::anyhow!("create_standard_answer_category failed: {}", e))?;
        let renamed = update_standard_answer_category(billing.id, "Payments".to_string())
            .await
            .map_err(|e| anyhow::anyhow!("update_standard_answer_category failed: {}", e))?;
        assert_eq!(renamed.name, "Payments");
        let categories = list_standard_answer_categories()
            .await
            .map_err(|e| anyhow::anyhow!("list_standard_answer_categories failed: {}", e))?;
        assert_eq!(categories, vec![renamed.clone()]);

        // 3. Create + get + update
        let created = create_standard_answer(StandardAnswerRequest {
            keyword: "Refund Policy".to_string(),
            answer: "Refunds within 14 days".to_string(),
            categories: vec![renamed.id],
        })
        .await
        .map_err(|e| anyhow::anyhow!("create_standard_answer failed: {}", e))?;

        let fetched = get_standard_answer(created.id)
            .await
            .map_err(|e| anyhow::anyhow!("get_standard_answer failed: {}", e))?;
        assert_eq!(fetched, created);

        let updated = update_standard_answer(
            created.id,
            StandardAnswerRequest {
                keyword: "refunds".to_string(),
                answer: "Refunds within 30 days".to_string(),
                categories: vec![],
            },
        )
        .await
        .map_err(|e| anyhow::anyhow!("update_standard_answer failed: {}", e))?;
        assert_eq!(updated.keyword, "refunds");
        assert!(updated.categories.is_empty());

        // 4. Unknown category surfaces the store message
        let bad = create_standard_answer(StandardAnswerRequest {
            keyword: "vpn".to_string(),
            answer: "x".to_string(),
            categories: vec![9999],
        })
        .await;
        let message = server_error_text(&bad.expect_err("unknown category must fail"));
        assert!(message.contains("do not exist"), "{}", message);

        // 5. Delete, then list is empty again
        delete_standard_answer(created.id)
            .await
            .map_err(|e| anyhow::anyhow!("delete_standard_answer failed: {}", e))?;
        let answers = list_standard_answers()
            .await
            .map_err(|e| anyhow::anyhow!("list_standard_answers failed: {}", e))?;
        assert!(answers.is_empty());

        // 6. Deleting again fails and the popup carries the server text
        let outcome = delete_standard_answer(created.id)
            .await
            .map_err(|e| server_error_text(&e));
        let popup = delete_popup(created.id, outcome);
        assert_eq!(
            popup.message,
            format!("Failed to delete standard answer - No standard answer with id {}", created.id)
        );

        // 7. Missing answer on get
        let missing = get_standard_answer(created.id).await;
        assert!(missing.is_err());

        Ok(())
    })
    .await
}
