use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "ingredientes")]
    pub ingredients: Vec<String>,
    #[serde(rename = "preparationSteps", alias = "modo_preparo")]
    pub preparation_steps: String,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
        preparation_steps: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            preparation_steps: preparation_steps.into(),
        }
    }
}

/// One day of the week with its meals in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMenu {
    pub day: String,
    pub meals: Vec<Meal>,
}

/// Day label -> meals, in the order the service sent them.
///
/// Backed by a `Vec` instead of a map so JSON object key order survives
/// deserialization without pulling in an ordered-map crate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyMenu {
    days: Vec<DayMenu>,
}

impl WeeklyMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day. Returns `false` (and leaves the menu untouched) if the
    /// day label is already present.
    pub fn push_day(&mut self, day: impl Into<String>, meals: Vec<Meal>) -> bool {
        let day = day.into();
        if self.get(&day).is_some() {
            return false;
        }
        self.days.push(DayMenu { day, meals });
        true
    }

    pub fn with_day(mut self, day: impl Into<String>, meals: Vec<Meal>) -> Self {
        self.push_day(day, meals);
        self
    }

    pub fn get(&self, day: &str) -> Option<&[Meal]> {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.meals.as_slice())
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.day.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayMenu> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a> IntoIterator for &'a WeeklyMenu {
    type Item = &'a DayMenu;
    type IntoIter = std::slice::Iter<'a, DayMenu>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for WeeklyMenu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for d in &self.days {
            map.serialize_entry(&d.day, &d.meals)?;
        }
        map.end()
    }
}

struct WeeklyMenuVisitor;

impl<'de> Visitor<'de> for WeeklyMenuVisitor {
    type Value = WeeklyMenu;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping day labels to lists of meals")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut menu = WeeklyMenu::new();
        while let Some((day, meals)) = access.next_entry::<String, Vec<Meal>>()? {
            if menu.get(&day).is_some() {
                return Err(de::Error::custom(format!("duplicate day `{day}`")));
            }
            menu.days.push(DayMenu { day, meals });
        }
        Ok(menu)
    }
}

impl<'de> Deserialize<'de> for WeeklyMenu {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeeklyMenuVisitor)
    }
}

/// Payload sent to the meal-planning service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuRequest {
    pub ingredients: String,
    #[serde(rename = "allowExtras")]
    pub allow_extras: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    Midday,
    Evening,
}

impl MealSlot {
    // Anything past the first meal of a day is rendered as an evening meal.
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Midday
        } else {
            Self::Evening
        }
    }
}
