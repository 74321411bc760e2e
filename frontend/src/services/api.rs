use async_trait::async_trait;
use catalog_domain::collection::{AuthorDirectory, Page, RecordMutation, RemoteCollection, SearchRequest};
use catalog_domain::favorites::FavoriteStore;
use catalog_domain::quote_form::QuoteSubmission;
use catalog_domain::session::SessionSource;
use catalog_domain::{CatalogConfig, CatalogError};
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AuthorPayload, AuthorRecord, AuthorRef, AuthorUpdate, CurrentUser, PageResponse, QuoteOfDay, QuoteRecord,
    QuoteUpdate,
};
use std::collections::BTreeMap;
use web_sys::RequestCredentials;

const COUNTRY_CODES_URL: &str = "https://flagcdn.com/en/codes.json";

/// API client for the catalog REST service
///
/// Every request carries the session cookie. Non-success statuses are
/// mapped through [`CatalogError::from_status`], so 401 and 403 surface as
/// [`CatalogError::Authorization`].
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        Request::put(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        Request::delete(&self.url(path)).credentials(RequestCredentials::Include)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, path: &str, request: &SearchRequest) -> Result<Page<T>, CatalogError> {
        let pairs = request.query_pairs();
        let builder = self
            .get(path)
            .query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let response = expect_ok(builder.send().await).await?;
        let page: PageResponse<T> = decode(response).await?;
        Ok(page.into())
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<(), CatalogError> {
        let request = builder
            .json(body)
            .map_err(|e| CatalogError::Network(format!("Failed to serialize request: {}", e)))?;
        expect_ok(request.send().await).await.map(|_| ())
    }

    pub async fn search_quotes(&self, request: &SearchRequest) -> Result<Page<QuoteRecord>, CatalogError> {
        self.fetch_page("quotes", request).await
    }

    pub async fn search_authors(&self, request: &SearchRequest) -> Result<Page<AuthorRecord>, CatalogError> {
        self.fetch_page("authors", request).await
    }

    pub async fn favorite_quotes(&self, request: &SearchRequest) -> Result<Page<QuoteRecord>, CatalogError> {
        self.fetch_page("users/favorites", request).await
    }

    /// `None` when no quote is scheduled for today
    pub async fn quote_of_day(&self) -> Result<Option<QuoteOfDay>, CatalogError> {
        let result = self.get("quotes/qod/today").send().await;
        match result {
            Ok(response) if response.status() == 404 || response.status() == 204 => Ok(None),
            other => decode(expect_ok(other).await?).await.map(Some),
        }
    }

    /// Full country list for the nationality search, `code -> name`
    pub async fn country_codes(&self) -> Result<BTreeMap<String, String>, CatalogError> {
        let response = expect_ok(Request::get(COUNTRY_CODES_URL).send().await).await?;
        decode(response).await
    }

    pub fn authors(&self) -> AuthorApi {
        AuthorApi(self.clone())
    }

    pub fn quotes(&self) -> QuoteApi {
        QuoteApi(self.clone())
    }

    pub fn favorites(&self) -> FavoriteQuotes {
        FavoriteQuotes(self.clone())
    }
}

async fn expect_ok(result: Result<Response, gloo::net::Error>) -> Result<Response, CatalogError> {
    let response = result.map_err(|e| CatalogError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(CatalogError::from_status(status, message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Author endpoints: submission, moderation and listing
#[derive(Clone, PartialEq)]
pub struct AuthorApi(ApiClient);

#[async_trait(?Send)]
impl RemoteCollection for AuthorApi {
    type Item = AuthorRecord;

    async fn search(&self, request: &SearchRequest) -> Result<Page<AuthorRecord>, CatalogError> {
        self.0.search_authors(request).await
    }
}

#[async_trait(?Send)]
impl RecordMutation for AuthorApi {
    type Payload = AuthorPayload;

    async fn create(&self, payload: &AuthorPayload) -> Result<(), CatalogError> {
        self.0.send_json(self.0.post("users/submitAuthor"), payload).await
    }

    async fn update(&self, id: i64, payload: &AuthorPayload) -> Result<(), CatalogError> {
        let body = AuthorUpdate {
            id,
            payload: payload.clone(),
        };
        self.0.send_json(self.0.put("moderate/author"), &body).await
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let path = format!("moderate/delete/author/{}", id);
        expect_ok(self.0.delete(&path).send().await).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl AuthorDirectory for AuthorApi {
    async fn find_authors(&self, name: &str) -> Result<Vec<AuthorRef>, CatalogError> {
        let response = expect_ok(self.0.get("authors/search").query([("name", name)]).send().await).await?;
        decode(response).await
    }
}

/// Quote endpoints: submission, moderation and listing
#[derive(Clone, PartialEq)]
pub struct QuoteApi(ApiClient);

#[async_trait(?Send)]
impl RemoteCollection for QuoteApi {
    type Item = QuoteRecord;

    async fn search(&self, request: &SearchRequest) -> Result<Page<QuoteRecord>, CatalogError> {
        self.0.search_quotes(request).await
    }
}

#[async_trait(?Send)]
impl RecordMutation for QuoteApi {
    type Payload = QuoteSubmission;

    async fn create(&self, submission: &QuoteSubmission) -> Result<(), CatalogError> {
        self.0.send_json(self.0.post("users/submitQuote"), &submission.payload).await
    }

    async fn update(&self, id: i64, submission: &QuoteSubmission) -> Result<(), CatalogError> {
        let body = QuoteUpdate {
            id,
            author: submission.author.clone(),
            payload: submission.payload.clone(),
        };
        self.0.send_json(self.0.put("moderate/quote"), &body).await
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let path = format!("moderate/delete/quote/{}", id);
        expect_ok(self.0.delete(&path).send().await).await.map(|_| ())
    }
}

/// The signed-in user's saved quotes
#[derive(Clone, PartialEq)]
pub struct FavoriteQuotes(ApiClient);

#[async_trait(?Send)]
impl RemoteCollection for FavoriteQuotes {
    type Item = QuoteRecord;

    async fn search(&self, request: &SearchRequest) -> Result<Page<QuoteRecord>, CatalogError> {
        self.0.favorite_quotes(request).await
    }
}

#[async_trait(?Send)]
impl SessionSource for ApiClient {
    async fn current_user(&self) -> Result<Option<CurrentUser>, CatalogError> {
        match expect_ok(self.get("users/me").send().await).await {
            Ok(response) => decode(response).await.map(Some),
            Err(e) if e.is_authorization() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn logout(&self) -> Result<(), CatalogError> {
        expect_ok(self.post("auth/logout").send().await).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl FavoriteStore for ApiClient {
    async fn favorite_ids(&self) -> Result<Vec<i64>, CatalogError> {
        decode(expect_ok(self.get("users/favorites/ids").send().await).await?).await
    }

    async fn add_favorite(&self, quote_id: i64) -> Result<(), CatalogError> {
        let path = format!("users/favorites/{}", quote_id);
        expect_ok(self.post(&path).send().await).await.map(|_| ())
    }

    async fn remove_favorite(&self, quote_id: i64) -> Result<(), CatalogError> {
        let path = format!("users/favorites/{}", quote_id);
        expect_ok(self.delete(&path).send().await).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8080/quoteapi/");
        assert_eq!(client.url("/quotes"), "http://localhost:8080/quoteapi/quotes");
        assert_eq!(client.url("users/me"), "http://localhost:8080/quoteapi/users/me");
    }

    #[wasm_bindgen_test]
    fn test_client_from_config() {
        let config = CatalogConfig::default().with_api_base_url("https://catalog.example/api");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.url("authors"), "https://catalog.example/api/authors");
        assert!(client.authors() == client.authors());
    }
}
