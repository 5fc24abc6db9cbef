//! Food Search

use crate::models::FoodHit;

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub(super) fn food_search_url(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.url("/usda/search", &[("query", query)]))
    }

    /// Search the food database; a blank query returns nothing without a request
    pub async fn search_foods(&self, query: &str) -> ApiResult<Vec<FoodHit>> {
        match self.food_search_url(query) {
            Some(url) => self.get_rows(&url).await,
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_search_url() {
        let client = ApiClient::new("http://api");
        assert_eq!(client.food_search_url("   "), None);
        assert_eq!(
            client.food_search_url(" oat milk ").as_deref(),
            Some("http://api/usda/search?query=oat%20milk")
        );
    }
}
