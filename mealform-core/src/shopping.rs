use crate::types::WeeklyMenu;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub count: usize,
}

/// Counts ingredient occurrences across every meal of the week.
///
/// Matching is case-insensitive on the trimmed name; the first spelling seen
/// wins and items keep first-appearance order.
pub fn shopping_list(menu: &WeeklyMenu) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    let all = menu
        .iter()
        .flat_map(|d| d.meals.iter())
        .flat_map(|m| m.ingredients.iter());

    for raw in all {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        match keys.iter().position(|k| *k == key) {
            Some(i) => items[i].count += 1,
            None => {
                keys.push(key);
                items.push(ShoppingItem {
                    ingredient: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    items
}
