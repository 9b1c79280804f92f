use crate::request::HttpRequest;
use mealform_core::types::MenuRequest;
use serde_json::json;

/// Builds the single POST the form sends to the meal-planning service.
pub fn build_generate_menu_request(endpoint: &str, payload: &MenuRequest) -> HttpRequest {
    // Built by hand so the wire names stay pinned here even if the struct's
    // serde attributes change.
    let body = json!({
        "ingredients": payload.ingredients,
        "allowExtras": payload.allow_extras,
    });

    HttpRequest {
        url: endpoint.trim().to_string(),
        headers: vec![
            ("Content-Type".into(), "application/json".into()),
            ("Accept".into(), "application/json".into()),
        ],
        json: body.to_string(),
    }
}
