use mealform_core::error::MenuServiceError;
use mealform_core::text::strip_code_fences;
use mealform_core::types::WeeklyMenu;

/// Decodes a success body into a `WeeklyMenu`, validating its shape.
///
/// Every failure is reported as `MalformedResponse`; callers never see a
/// partially decoded menu.
pub fn parse_weekly_menu(body: &[u8]) -> Result<WeeklyMenu, MenuServiceError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| MenuServiceError::MalformedResponse(format!("body is not UTF-8: {e}")))?;
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(MenuServiceError::MalformedResponse("empty body".into()));
    }

    serde_json::from_str(&cleaned)
        .map_err(|e| MenuServiceError::MalformedResponse(format!("decode menu JSON: {e}")))
}
