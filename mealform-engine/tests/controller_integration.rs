use std::sync::Arc;
use std::time::Duration;

use mealform_core::error::MenuServiceError;
use mealform_core::locale::Locale;
use mealform_core::types::{MenuRequest, WeeklyMenu};
use mealform_engine::controller::{ControllerOptions, FormSessionController};
use mealform_engine::session::{SessionStatus, SubmitOutcome};
use mealform_engine::traits::MenuService;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct HttpPlanner {
    url: String,
}

#[async_trait::async_trait]
impl MenuService for HttpPlanner {
    async fn generate(&self, request: &MenuRequest) -> Result<WeeklyMenu, MenuServiceError> {
        let req = mealform_providers::menu_service::build_generate_menu_request(&self.url, request);
        let resp = mealform_providers::runtime::execute(&req, Duration::from_secs(10)).await?;
        if !resp.is_success() {
            return Err(MenuServiceError::Service {
                status: resp.status,
                body: String::new(),
            });
        }
        mealform_providers::parse::parse_weekly_menu(&resp.body)
    }
}

fn day(label: &str) -> String {
    format!(
        r#"{{"{label}":[{{"name":"Meal","ingredients":["rice"],"preparationSteps":"Cook."}}]}}"#
    )
}

#[tokio::test]
async fn slower_older_response_never_overwrites_newer_one() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/menu"))
        .and(body_partial_json(serde_json::json!({"ingredients": "old"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(day("Old"), "application/json")
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/menu"))
        .and(body_partial_json(serde_json::json!({"ingredients": "new"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(day("New"), "application/json"))
        .mount(&server)
        .await;

    let c = FormSessionController::new(
        Arc::new(HttpPlanner {
            url: format!("{}/menu", server.uri()),
        }),
        ControllerOptions {
            timeout: Duration::from_secs(5),
            locale: Locale::English,
        },
    );

    c.update_ingredients("old");
    let old = tokio::spawn(c.submit());
    c.update_ingredients("new");
    let new = tokio::spawn(c.submit());

    assert_eq!(new.await?, SubmitOutcome::Succeeded);
    assert_eq!(old.await?, SubmitOutcome::Superseded);

    let s = c.state();
    assert_eq!(s.status(), SessionStatus::Success);
    assert_eq!(s.menu().unwrap().days().collect::<Vec<_>>(), ["New"]);
    Ok(())
}

#[tokio::test]
async fn session_is_never_left_loading() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let c = FormSessionController::new(
        Arc::new(HttpPlanner { url: server.uri() }),
        ControllerOptions::default(),
    );

    let mut rx = c.subscribe();
    c.spawn_submit();

    // Watch every published snapshot until the session settles.
    rx.wait_for(|s| !s.is_loading()).await?;
    let s = c.settled().await;
    assert_eq!(s.status(), SessionStatus::Failed);
    assert!(s.error_message().is_some());
    assert!(s.menu().is_none());
    Ok(())
}
