use mealform_core::error::MenuServiceError;
use mealform_core::types::{MenuRequest, WeeklyMenu};
use mealform_engine::traits::MenuService;
use mealform_providers::menu_service::build_generate_menu_request;
use mealform_providers::parse::parse_weekly_menu;
use mealform_providers::runtime;
use std::time::Duration;

/// `MenuService` backed by the HTTP generate-menu endpoint.
#[derive(Debug, Clone)]
pub struct HttpMenuService {
    endpoint: String,
    timeout: Duration,
}

impl HttpMenuService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl MenuService for HttpMenuService {
    async fn generate(&self, request: &MenuRequest) -> Result<WeeklyMenu, MenuServiceError> {
        let req = build_generate_menu_request(&self.endpoint, request);
        let resp = runtime::execute(&req, self.timeout).await?;

        if !resp.is_success() {
            return Err(MenuServiceError::Service {
                status: resp.status,
                body: String::from_utf8_lossy(&resp.body).into_owned(),
            });
        }

        parse_weekly_menu(&resp.body)
    }
}
