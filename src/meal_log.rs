//! Meal Log State
//!
//! Pure helpers behind the meal log page.

use crate::models::{FoodHit, Meal, MealType};

/// Serving multipliers offered when adding a food
pub const SERVING_OPTIONS: [f64; 7] = [0.25, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// Meals bucketed by type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealSections {
    pub breakfast: Vec<Meal>,
    pub lunch: Vec<Meal>,
    pub dinner: Vec<Meal>,
    pub snacks: Vec<Meal>,
}

impl MealSections {
    pub fn from_meals(meals: &[Meal]) -> Self {
        let mut sections = Self::default();
        for meal in meals {
            sections.section_mut(meal.meal_type).push(meal.clone());
        }
        sections
    }

    pub fn section(&self, meal_type: MealType) -> &[Meal] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    fn section_mut(&mut self, meal_type: MealType) -> &mut Vec<Meal> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }

    /// First of breakfast/lunch/dinner with nothing logged
    pub fn first_empty_section(&self) -> Option<MealType> {
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
            .into_iter()
            .find(|meal_type| self.section(*meal_type).is_empty())
    }
}

/// Next expanded section: opening one closes any other, clicking the open one collapses it
pub fn toggle_section(expanded: Option<MealType>, meal_type: MealType) -> Option<MealType> {
    if expanded == Some(meal_type) {
        None
    } else {
        Some(meal_type)
    }
}

/// A meal taken out of the list while its delete request is in flight
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRemoval {
    pub index: usize,
    pub meal: Meal,
}

/// Remove the meal with `id`, remembering where it was
pub fn take_meal(meals: &mut Vec<Meal>, id: i64) -> Option<PendingRemoval> {
    let index = meals.iter().position(|meal| meal.id == id)?;
    let meal = meals.remove(index);
    Some(PendingRemoval { index, meal })
}

/// Put a meal back after a failed delete
pub fn restore_meal(meals: &mut Vec<Meal>, pending: PendingRemoval) {
    if meals.iter().any(|meal| meal.id == pending.meal.id) {
        return;
    }
    let index = pending.index.min(meals.len());
    meals.insert(index, pending.meal);
}

fn effective_multiplier(multiplier: f64) -> f64 {
    if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        1.0
    }
}

/// Nutrients of `food` scaled to `multiplier` servings
pub fn scale_food(food: &FoodHit, multiplier: f64) -> FoodHit {
    let m = effective_multiplier(multiplier);
    FoodHit {
        description: food.description.clone(),
        calories: food.calories * m,
        protein: food.protein * m,
        carbohydrates: food.carbohydrates * m,
        fat: food.fat * m,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutrientTotals {
    pub fn sum(meals: &[Meal]) -> Self {
        meals.iter().fold(Self::default(), |acc, meal| Self {
            calories: acc.calories + meal.calories,
            protein: acc.protein + meal.protein,
            carbs: acc.carbs + meal.carbs,
            fats: acc.fats + meal.fats,
        })
    }
}

/// Generation counter for search-as-you-type.
///
/// Each keystroke issues a new ticket; a response is applied only if its
/// ticket is still the latest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn is_current(self, latest: SearchTicket) -> bool {
        self == latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_meal(id: i64, meal_type: MealType, calories: f64) -> Meal {
        Meal {
            id,
            meal_type,
            food_name: format!("Food {}", id),
            calories,
            protein: 1.0,
            carbs: 2.0,
            fats: 0.5,
        }
    }

    #[test]
    fn test_sections_and_expand() {
        let meals = vec![
            make_meal(1, MealType::Lunch, 100.0),
            make_meal(2, MealType::Snacks, 50.0),
            make_meal(3, MealType::Lunch, 200.0),
        ];
        let sections = MealSections::from_meals(&meals);
        assert_eq!(sections.section(MealType::Lunch).len(), 2);
        assert_eq!(sections.section(MealType::Breakfast).len(), 0);
        assert_eq!(sections.first_empty_section(), Some(MealType::Breakfast));

        let expanded = toggle_section(None, MealType::Lunch);
        assert_eq!(expanded, Some(MealType::Lunch));
        let expanded = toggle_section(expanded, MealType::Dinner);
        assert_eq!(expanded, Some(MealType::Dinner));
        assert_eq!(toggle_section(expanded, MealType::Dinner), None);
    }

    #[test]
    fn test_first_empty_section_ignores_snacks() {
        let meals = vec![
            make_meal(1, MealType::Breakfast, 1.0),
            make_meal(2, MealType::Lunch, 1.0),
            make_meal(3, MealType::Dinner, 1.0),
        ];
        assert_eq!(MealSections::from_meals(&meals).first_empty_section(), None);
    }

    #[test]
    fn test_optimistic_remove_and_rollback() {
        let mut meals = vec![
            make_meal(1, MealType::Lunch, 1.0),
            make_meal(2, MealType::Lunch, 2.0),
            make_meal(3, MealType::Lunch, 3.0),
        ];
        let original = meals.clone();

        assert!(take_meal(&mut meals, 99).is_none());

        let pending = take_meal(&mut meals, 2).unwrap();
        assert_eq!(pending.index, 1);
        assert_eq!(meals.len(), 2);

        restore_meal(&mut meals, pending.clone());
        assert_eq!(meals, original);

        // already back, no duplicate
        restore_meal(&mut meals, pending);
        assert_eq!(meals.len(), 3);
    }

    #[test]
    fn test_rollback_after_list_shrank() {
        let mut meals = vec![make_meal(1, MealType::Lunch, 1.0), make_meal(2, MealType::Lunch, 2.0)];
        let pending = take_meal(&mut meals, 2).unwrap();
        meals.clear();
        restore_meal(&mut meals, pending);
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, 2);
    }

    #[test]
    fn test_scale_food() {
        let food = FoodHit {
            description: "Rice".to_string(),
            calories: 200.0,
            protein: 4.0,
            carbohydrates: 45.0,
            fat: 0.5,
        };
        let scaled = scale_food(&food, 1.5);
        assert_eq!(scaled.calories, 300.0);
        assert_eq!(scaled.carbohydrates, 67.5);

        assert_eq!(scale_food(&food, 0.0), food);
        assert_eq!(scale_food(&food, f64::NAN), food);
    }

    #[test]
    fn test_totals() {
        let meals = vec![make_meal(1, MealType::Lunch, 100.0), make_meal(2, MealType::Dinner, 250.0)];
        let totals = NutrientTotals::sum(&meals);
        assert_eq!(totals.calories, 350.0);
        assert_eq!(totals.protein, 2.0);
        assert_eq!(NutrientTotals::sum(&[]), NutrientTotals::default());
    }

    #[test]
    fn test_search_ticket() {
        let first = SearchTicket::default().next();
        let second = first.next();
        assert!(!first.is_current(second));
        assert!(second.is_current(second));
    }
}
