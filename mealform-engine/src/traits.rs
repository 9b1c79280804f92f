use async_trait::async_trait;
use mealform_core::error::MenuServiceError;
use mealform_core::types::{MenuRequest, WeeklyMenu};

/// The remote meal planner, as seen by the form.
#[async_trait]
pub trait MenuService: Send + Sync {
    async fn generate(&self, request: &MenuRequest) -> Result<WeeklyMenu, MenuServiceError>;
}
