//! Frontend Models
//!
//! Grocery entries persisted in local storage, plus the meal-log shapes
//! exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ========================
// Grocery
// ========================

/// Opaque grocery entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grocery aisle category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Produce,
    MeatSeafood,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    #[default]
    Other,
}

impl Category {
    /// Canonical display and grouping order
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::MeatSeafood,
        Category::Dairy,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::MeatSeafood => "Meat/Seafood",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Other => "Other",
        }
    }

    /// Exact label match after trimming
    pub fn try_parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Unknown or blank labels fall back to `Other`
    pub fn parse(label: &str) -> Self {
        Self::try_parse(label).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .map(Category::parse)
            .unwrap_or_default())
    }
}

/// Returns `quantity` when it is a positive finite number, else 1
pub fn normalize_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        1.0
    }
}

/// Parse form text into a quantity; unparseable text becomes 1
pub fn parse_quantity(text: &str) -> f64 {
    text.trim().parse::<f64>().map(normalize_quantity).unwrap_or(1.0)
}

fn default_quantity() -> f64 {
    1.0
}

fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().map(normalize_quantity).unwrap_or(1.0),
        Some(Value::String(s)) => parse_quantity(&s),
        _ => 1.0,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

/// One grocery list entry
///
/// Older saves used `qty` and `purchased`; both are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    #[serde(alias = "qty", default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub category: Category,
    #[serde(alias = "purchased", default, deserialize_with = "lenient_flag")]
    pub completed: bool,
}

/// Partial update for an entry; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub category: Option<String>,
}

/// Inline-edit form text for one entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub name: String,
    pub quantity: String,
    pub category: String,
}

impl EditDraft {
    /// Seed the form from the entry's current values
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            quantity: entry.quantity.to_string(),
            category: entry.category.as_str().to_string(),
        }
    }

    /// `None` while the name is blank
    pub fn to_patch(&self) -> Option<EntryPatch> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(EntryPatch {
            name: Some(self.name.clone()),
            quantity: Some(parse_quantity(&self.quantity)),
            category: Some(self.category.clone()),
        })
    }
}

// ========================
// Meal log
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }

    /// Case-insensitive; anything unrecognized is filed under snacks
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            _ => MealType::Snacks,
        }
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .map(MealType::parse)
            .unwrap_or(MealType::Snacks))
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Food search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodHit {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbohydrates: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,
}

fn default_meal_type() -> MealType {
    MealType::Snacks
}

/// Logged meal row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    #[serde(default = "default_meal_type")]
    pub meal_type: MealType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fats: f64,
}

/// Request body for logging a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMeal {
    pub user_email: String,
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NewMeal {
    pub fn from_food(user_email: &str, meal_type: MealType, food: &FoodHit) -> Self {
        Self {
            user_email: user_email.to_string(),
            meal_type,
            food_name: food.description.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbohydrates,
            fats: food.fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealLogged {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("Dairy"), Category::Dairy);
        assert_eq!(Category::parse("  Meat/Seafood "), Category::MeatSeafood);
        assert_eq!(Category::parse("dairy"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
        assert_eq!(Category::try_parse("Bogus"), None);
    }

    #[test]
    fn test_quantity_normalization() {
        assert_eq!(normalize_quantity(2.5), 2.5);
        assert_eq!(normalize_quantity(0.0), 1.0);
        assert_eq!(normalize_quantity(-3.0), 1.0);
        assert_eq!(normalize_quantity(f64::NAN), 1.0);
        assert_eq!(normalize_quantity(f64::INFINITY), 1.0);
        assert_eq!(parse_quantity(" 3 "), 3.0);
        assert_eq!(parse_quantity("abc"), 1.0);
        assert_eq!(parse_quantity("-1"), 1.0);
    }

    #[test]
    fn test_entry_serialized_shape() {
        let entry = Entry {
            id: EntryId::from("a1"),
            name: "Milk".to_string(),
            quantity: 2.0,
            category: Category::Dairy,
            completed: false,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a1",
                "name": "Milk",
                "quantity": 2.0,
                "category": "Dairy",
                "completed": false
            })
        );
    }

    #[test]
    fn test_entry_reads_legacy_fields() {
        let json = r#"{"id":"x","name":"Eggs","qty":"12","purchased":true}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity, 12.0);
        assert!(entry.completed);
        assert_eq!(entry.category, Category::Other);
    }

    #[test]
    fn test_entry_normalizes_bad_fields() {
        let json = r#"{"id":"x","name":"Eggs","quantity":-4,"category":42,"completed":null}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity, 1.0);
        assert_eq!(entry.category, Category::Other);
        assert!(!entry.completed);
    }

    #[test]
    fn test_meal_defaults_missing_nutrients() {
        let json = r#"{"id":7,"meal_type":"lunch","food_name":"Apple","calories":null,"user_email":"a@b.c"}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert_eq!(meal.calories, 0.0);
        assert_eq!(meal.fats, 0.0);
    }

    #[test]
    fn test_meal_rows_tolerate_null_and_unknown_values() {
        let json = r#"[
            {"id":1,"meal_type":"lunch","food_name":"Apple","calories":52},
            {"id":2,"meal_type":"Snack","food_name":null,"calories":10},
            {"id":3,"meal_type":null,"food_name":"Toast"},
            {"id":4,"meal_type":"DINNER","food_name":"Soup"}
        ]"#;
        let meals: Vec<Meal> = serde_json::from_str(json).unwrap();
        assert_eq!(meals.len(), 4);
        assert_eq!(meals[1].meal_type, MealType::Snacks);
        assert_eq!(meals[1].food_name, "");
        assert_eq!(meals[2].meal_type, MealType::Snacks);
        assert_eq!(meals[3].meal_type, MealType::Dinner);
    }

    #[test]
    fn test_food_hit_null_description() {
        let json = r#"[{"description":null,"calories":"12.5"},{"description":"Oats","fat":null}]"#;
        let hits: Vec<FoodHit> = serde_json::from_str(json).unwrap();
        assert_eq!(hits[0].description, "");
        assert_eq!(hits[0].calories, 12.5);
        assert_eq!(hits[1].description, "Oats");
        assert_eq!(hits[1].fat, 0.0);
    }

    #[test]
    fn test_edit_draft_reseeds_from_entry() {
        let entry = Entry {
            id: EntryId::from("a1"),
            name: "Milk".to_string(),
            quantity: 2.0,
            category: Category::Dairy,
            completed: false,
        };
        let mut draft = EditDraft::from_entry(&entry);
        draft.name = "Oat milk".to_string();
        draft.quantity = "9".to_string();

        let reopened = EditDraft::from_entry(&entry);
        assert_eq!(reopened.name, "Milk");
        assert_eq!(reopened.quantity, "2");
        assert_eq!(reopened.category, "Dairy");
    }

    #[test]
    fn test_edit_draft_patch() {
        let draft = EditDraft {
            name: " Bread ".to_string(),
            quantity: "abc".to_string(),
            category: "Bakery".to_string(),
        };
        let patch = draft.to_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some(" Bread "));
        assert_eq!(patch.quantity, Some(1.0));
        assert_eq!(patch.category.as_deref(), Some("Bakery"));

        let blank = EditDraft { name: "  ".to_string(), ..draft };
        assert_eq!(blank.to_patch(), None);
    }
}
