//! Meal Log Page Component
//!
//! Today's meals by section, with daily totals and a reset.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ConfirmButton, MealSection};
use crate::context::use_app_context;
use crate::meal_log::{MealSections, NutrientTotals};
use crate::models::MealType;
use crate::store::{store_meals, store_set_meals, store_user_email, use_app_store};

#[component]
pub fn MealLogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let expanded = RwSignal::new(None::<MealType>);
    let sections = Memo::new(move |_| MealSections::from_meals(&store_meals(&store)));
    let totals = Memo::new(move |_| NutrientTotals::sum(&store_meals(&store)));

    // Load today's meals when the user or trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some(email) = store_user_email(&store) else { return };
        log::debug!("loading meals for {}, trigger={}", email, trigger);
        let api = ctx.api();
        spawn_local(async move {
            match api.today_meals(&email).await {
                Ok(meals) => {
                    log::debug!("loaded {} meals", meals.len());
                    store_set_meals(&store, meals);
                }
                Err(e) => log::warn!("loading meals failed: {}", e),
            }
        });
    });

    let clear_log = Callback::new(move |_: ()| {
        let Some(email) = store_user_email(&store) else { return };
        let api = ctx.api();
        spawn_local(async move {
            match api.reset_meals(&email).await {
                Ok(()) => {
                    store_set_meals(&store, Vec::new());
                    ctx.reload();
                }
                Err(e) => log::error!("clearing meal log failed: {}", e),
            }
        });
    });

    view! {
        <div class="log-page">
            <div class="log-totals">
                {move || {
                    let t = totals.get();
                    view! {
                        <span class="log-total">{format!("{:.0} kcal", t.calories)}</span>
                        <span class="log-total">{format!("{:.0}g protein", t.protein)}</span>
                        <span class="log-total">{format!("{:.0}g carbs", t.carbs)}</span>
                        <span class="log-total">{format!("{:.0}g fat", t.fats)}</span>
                    }
                }}
            </div>

            {move || sections.get().first_empty_section().map(|meal_type| view! {
                <p class="log-suggestion">{format!("Nothing logged for {} yet.", meal_type.label().to_lowercase())}</p>
            })}

            {MealType::ALL.into_iter().map(|meal_type| {
                let meals = Signal::derive(move || sections.get().section(meal_type).to_vec());
                view! { <MealSection meal_type=meal_type meals=meals expanded=expanded /> }
            }).collect_view()}

            <div class="log-footer">
                <ConfirmButton button_class="secondary-btn" label="Clear Log" on_confirm=clear_log />
            </div>
        </div>
    }
}
