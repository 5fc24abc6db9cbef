//! Meal Log Endpoints

use crate::models::{Meal, MealLogged, NewMeal};

use super::{ApiClient, ApiError, ApiResult};

impl ApiClient {
    pub async fn log_meal(&self, meal: &NewMeal) -> ApiResult<i64> {
        let url = self.url("/meals/log", &[]);
        let logged: MealLogged = self.post_json(&url, meal).await?;
        logged_id(logged)
    }

    pub async fn today_meals(&self, user_email: &str) -> ApiResult<Vec<Meal>> {
        let url = self.url("/meals/today", &[("user_email", user_email)]);
        self.get_rows(&url).await
    }

    pub async fn delete_meal(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/meals/{}", id), &[]);
        self.delete(&url).await
    }

    /// Remove every logged meal for the user
    pub async fn reset_meals(&self, user_email: &str) -> ApiResult<()> {
        let url = self.url("/meals/reset", &[("user_email", user_email)]);
        self.delete(&url).await
    }
}

fn logged_id(logged: MealLogged) -> ApiResult<i64> {
    match logged {
        MealLogged { ok: true, id: Some(id) } => Ok(id),
        _ => Err(ApiError::Decode("meal was not logged".to_string())),
    }
}
