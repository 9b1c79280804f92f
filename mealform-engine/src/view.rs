use crate::session::SessionState;
use mealform_core::locale::Locale;
use mealform_core::types::{MealSlot, WeeklyMenu};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSection {
    pub slot: MealSlot,
    pub slot_label: String,
    pub name: String,
    // Comma-joined for display.
    pub ingredients: String,
    pub preparation_steps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySection {
    pub day: String,
    pub meals: Vec<MealSection>,
}

/// Everything a renderer needs to draw the form, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub ingredients_text: String,
    pub allow_extras: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub error_banner: Option<String>,
    pub menu: Option<Vec<DaySection>>,
}

pub fn render(state: &SessionState, locale: Locale) -> ViewModel {
    let loading = state.is_loading();
    let submit_label = if loading {
        locale.loading_label()
    } else {
        locale.submit_label()
    };

    ViewModel {
        ingredients_text: state.ingredients_text().to_string(),
        allow_extras: state.allow_extras(),
        submit_enabled: !loading,
        submit_label: submit_label.into(),
        error_banner: state.error_message().map(str::to_string),
        menu: state.menu().map(|m| render_menu(m, locale)),
    }
}

/// Day sections in service order; meals keep their position within the day.
/// Days with fewer than two meals render only what is there.
pub fn render_menu(menu: &WeeklyMenu, locale: Locale) -> Vec<DaySection> {
    menu.iter()
        .map(|d| DaySection {
            day: d.day.clone(),
            meals: d
                .meals
                .iter()
                .enumerate()
                .map(|(idx, meal)| {
                    let slot = MealSlot::for_index(idx);
                    MealSection {
                        slot,
                        slot_label: locale.slot_label(slot).into(),
                        name: meal.name.clone(),
                        ingredients: meal.ingredients.join(", "),
                        preparation_steps: meal.preparation_steps.clone(),
                    }
                })
                .collect(),
        })
        .collect()
}
