//! Nutritionix v1.1 API client
//!
//! Menu items are searched with a JSON `POST` filtered by brand id; brands are
//! looked up with a `GET` carrying credentials as query parameters.

use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse};
use super::types::{BrandPage, Credentials, SearchPage};
use crate::config::ApiSettings;
use crate::fetch::PageSource;
use crate::menu::{RestaurantId, FIELDS};
use crate::network::HttpClient;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.nutritionix.com/v1_1/";

/// Brand `type` for restaurants, as opposed to food manufacturers
const RESTAURANT_BRAND_TYPE: u8 = 1;

/// Client for the Nutritionix search endpoints
#[derive(Clone)]
pub struct Nutritionix {
    client: HttpClient,
    credentials: Credentials,
    search_url: Url,
    brand_url: Url,
}

impl Nutritionix {
    /// Create a client rooted at `base_url`
    pub fn new(
        client: HttpClient,
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client,
            credentials,
            search_url: base.join("search")?,
            brand_url: base.join("brand/search")?,
        })
    }

    /// Create a client and its HTTP layer from settings
    pub fn from_settings(settings: &ApiSettings, credentials: Credentials) -> Result<Self, ApiError> {
        let client = HttpClient::with_settings(settings)?;
        Self::new(client, credentials, &settings.base_url)
    }

    /// Build the request for one page of a brand's menu items
    pub fn search_request(&self, brand_id: &str, offset: usize, limit: usize) -> ApiRequest {
        ApiRequest::post(self.search_url.as_str()).json(json!({
            "appId": self.credentials.app_id,
            "appKey": self.credentials.app_key,
            "filters": { "brand_id": brand_id },
            "offset": offset,
            "limit": limit,
            "fields": FIELDS,
        }))
    }

    /// Decode a menu item search response
    pub fn parse_search(response: ApiResponse) -> Result<SearchPage, ApiError> {
        response.error_for_status()?.json()
    }

    /// Build the request resolving a restaurant name to its brand id
    pub fn brand_request(&self, name: &str) -> ApiRequest {
        ApiRequest::get(self.brand_url.as_str())
            .param("appId", &self.credentials.app_id)
            .param("appKey", &self.credentials.app_key)
            .param("query", name)
            .param("type", RESTAURANT_BRAND_TYPE)
            .param("limit", 1)
            .param("offset", 0)
    }

    /// Decode a brand search response, taking the best hit
    pub fn parse_brand(name: &str, response: ApiResponse) -> Result<RestaurantId, ApiError> {
        let page: BrandPage = response.error_for_status()?.json()?;
        page.hits
            .into_iter()
            .next()
            .map(|hit| hit.fields.into())
            .ok_or_else(|| ApiError::NoMatch(name.to_string()))
    }

    /// Look up the brand id for a restaurant name
    pub async fn find_restaurant(&self, name: &str) -> Result<RestaurantId, ApiError> {
        let response = self.client.execute(self.brand_request(name)).await?;
        let id = Self::parse_brand(name, response)?;
        info!("Resolved {:?} to {} ({})", name, id.name, id.id);
        Ok(id)
    }

    /// Look up several restaurants in order, stopping at the first failure
    pub async fn find_restaurants(&self, names: &[String]) -> Result<Vec<RestaurantId>, ApiError> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.find_restaurant(name).await?);
        }
        Ok(ids)
    }
}

#[async_trait]
impl PageSource for Nutritionix {
    async fn fetch_page(
        &self,
        entity_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchPage, ApiError> {
        debug!("Requesting {} items of {} at offset {}", limit, entity_id, offset);
        let request = self.search_request(entity_id, offset, limit);
        let response = self.client.execute(request).await?;
        Self::parse_search(response)
    }
}
