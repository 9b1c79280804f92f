use std::sync::Arc;

use mealform_core::config::ClientConfig;
use mealform_engine::controller::{ControllerOptions, FormSessionController};

use crate::menu_service::HttpMenuService;

/// Build a form session talking to the configured endpoint.
pub fn build_controller(cfg: &ClientConfig) -> FormSessionController {
    let service = Arc::new(HttpMenuService::new(cfg.endpoint.clone(), cfg.timeout()));
    FormSessionController::new(service, ControllerOptions::from(cfg))
}
