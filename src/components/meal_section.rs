//! Meal Section Component
//!
//! One meal type: logged foods, and when expanded, a search box with
//! serving picker for adding more.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::meal_log::{scale_food, toggle_section, SearchTicket, SERVING_OPTIONS};
use crate::models::{FoodHit, Meal, MealType, NewMeal};
use crate::store::{store_add_meal, store_restore_meal, store_take_meal, store_user_email, use_app_store};

#[component]
pub fn MealSection(
    meal_type: MealType,
    #[prop(into)] meals: Signal<Vec<Meal>>,
    expanded: RwSignal<Option<MealType>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let results = RwSignal::new(Vec::<FoodHit>::new());
    let searching = RwSignal::new(false);
    let latest = RwSignal::new(SearchTicket::default());
    let selected = RwSignal::new(None::<FoodHit>);
    let servings = RwSignal::new(1.0_f64);

    let is_open = move || expanded.get() == Some(meal_type);

    let reset_search = move || {
        latest.update(|t| *t = t.next());
        set_query.set(String::new());
        results.set(Vec::new());
        searching.set(false);
    };

    let toggle = move |_| {
        expanded.update(|current| *current = toggle_section(*current, meal_type));
        reset_search();
    };

    // Debounced search-as-you-type; stale responses are dropped
    let on_query = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        set_query.set(text.clone());
        let ticket = latest.get_untracked().next();
        latest.set(ticket);
        if text.trim().is_empty() {
            results.set(Vec::new());
            searching.set(false);
            return;
        }

        let api = ctx.api();
        let delay = ctx.config().search_debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let still_current = move || latest.try_get_untracked().is_some_and(|l| ticket.is_current(l));
            if !still_current() {
                return;
            }
            searching.try_set(true);
            let found = match api.search_foods(&text).await {
                Ok(found) => found,
                Err(e) => {
                    log::warn!("food search '{}' failed: {}", text, e);
                    Vec::new()
                }
            };
            if still_current() {
                results.try_set(found);
                searching.try_set(false);
            }
        });
    };

    let confirm_add = move |_| {
        let Some(food) = selected.get() else { return };
        let Some(email) = store_user_email(&store) else { return };
        let scaled = scale_food(&food, servings.get());
        let new_meal = NewMeal::from_food(&email, meal_type, &scaled);
        let api = ctx.api();

        selected.set(None);
        expanded.set(None);
        reset_search();

        spawn_local(async move {
            match api.log_meal(&new_meal).await {
                Ok(id) => {
                    store_add_meal(
                        &store,
                        Meal {
                            id,
                            meal_type,
                            food_name: new_meal.food_name.clone(),
                            calories: new_meal.calories,
                            protein: new_meal.protein,
                            carbs: new_meal.carbs,
                            fats: new_meal.fats,
                        },
                    );
                    ctx.reload();
                }
                Err(e) => log::error!("logging '{}' failed: {}", new_meal.food_name, e),
            }
        });
    };

    let remove_meal = move |meal_id: i64| {
        let Some(pending) = store_take_meal(&store, meal_id) else { return };
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.delete_meal(meal_id).await {
                log::warn!("deleting meal {} failed, restoring: {}", meal_id, e);
                store_restore_meal(&store, pending);
            }
        });
    };

    view! {
        <section class=move || if is_open() { "meal-section expanded" } else { "meal-section" }>
            <div class="meal-section-header" on:click=toggle>
                <span class="meal-section-title">{meal_type.label()}</span>
                <span class="meal-section-count">{move || meals.get().len()}</span>
                <span class="meal-section-toggle">{move || if is_open() { "−" } else { "+" }}</span>
            </div>

            <ul class="meal-list">
                {move || meals.get().into_iter().map(|meal| {
                    let meal_id = meal.id;
                    view! {
                        <li class="meal-item">
                            <span class="meal-name">{meal.food_name.clone()}</span>
                            <span class="meal-meta">{format!("{:.0} kcal", meal.calories)}</span>
                            <button class="delete-btn" type="button" on:click=move |_| remove_meal(meal_id)>"×"</button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <Show when=is_open>
                <div class="meal-search">
                    <input
                        type="text"
                        class="meal-search-input"
                        placeholder=format!("Search foods for {}...", meal_type.label().to_lowercase())
                        prop:value=move || query.get()
                        on:input=on_query
                    />
                    <Show when=move || searching.get()>
                        <div class="meal-search-status">"Searching..."</div>
                    </Show>
                    <ul class="meal-search-results">
                        {move || results.get().into_iter().map(|food| {
                            let label = food.description.clone();
                            let calories = food.calories;
                            view! {
                                <li class="meal-search-hit" on:click=move |_| {
                                    servings.set(1.0);
                                    selected.set(Some(food.clone()));
                                }>
                                    <span>{label}</span>
                                    <span class="meal-meta">{format!("{:.0} kcal", calories)}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </Show>

            {move || selected.get().map(|food| {
                let food = StoredValue::new(food);
                let preview = move || food.with_value(|f| scale_food(f, servings.get()));
                view! {
                    <div class="meal-modal-overlay" on:click=move |_| selected.set(None)>
                        <div class="meal-modal" on:click=|ev| ev.stop_propagation()>
                            <h3 class="meal-modal-title">{preview().description}</h3>
                            <div class="meal-modal-row">
                                <span>"Calories"</span>
                                <span>{move || format!("{:.0}", preview().calories)}</span>
                            </div>
                            <div class="meal-modal-row">
                                <span>"Protein"</span>
                                <span>{move || format!("{:.0}g", preview().protein)}</span>
                            </div>
                            <div class="meal-modal-row">
                                <span>"Carbs"</span>
                                <span>{move || format!("{:.0}g", preview().carbohydrates)}</span>
                            </div>
                            <div class="meal-modal-row">
                                <span>"Fat"</span>
                                <span>{move || format!("{:.0}g", preview().fat)}</span>
                            </div>
                            <div class="serving-picker">
                                {SERVING_OPTIONS.iter().map(|&option| view! {
                                    <button
                                        type="button"
                                        class=move || if servings.get() == option { "serving-btn active" } else { "serving-btn" }
                                        on:click=move |_| servings.set(option)
                                    >
                                        {format!("{}x", option)}
                                    </button>
                                }).collect_view()}
                            </div>
                            <div class="meal-modal-actions">
                                <button class="primary-btn" type="button" on:click=confirm_add>"Add"</button>
                                <button class="secondary-btn" type="button" on:click=move |_| selected.set(None)>"Cancel"</button>
                            </div>
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
