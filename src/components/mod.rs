//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod grocery_add_form;
mod grocery_drawer;
mod grocery_item_row;
mod meal_log_page;
mod meal_section;
mod sign_in_form;
mod top_bar;

pub use confirm_button::ConfirmButton;
pub use grocery_add_form::GroceryAddForm;
pub use grocery_drawer::GroceryDrawer;
pub use grocery_item_row::GroceryItemRow;
pub use meal_log_page::MealLogPage;
pub use meal_section::MealSection;
pub use sign_in_form::SignInForm;
pub use top_bar::TopBar;
