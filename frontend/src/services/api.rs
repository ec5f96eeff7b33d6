use async_trait::async_trait;
use gloo::net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{Book, BookId};
use thiserror::Error;

use crate::config;
use crate::services::logging::Logger;

const COMPONENT: &str = "api";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Failure of a single call to the library service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {status}")]
    Status { status: u16 },
    #[error("Server returned an empty response")]
    EmptyBody,
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// The server answered, but without a usable payload
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. } | ApiError::EmptyBody)
    }
}

/// The five calls the library front-end makes against `/api/Books`
#[async_trait(?Send)]
pub trait BookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;

    /// `Ok(None)` when the service has no book with this id
    async fn get_book(&self, id: BookId) -> Result<Option<Book>, ApiError>;

    async fn create_book(&self, book: &Book) -> Result<Book, ApiError>;

    /// Full-record replace keyed by `book.id`
    async fn update_book(&self, book: &Book) -> Result<Book, ApiError>;

    async fn delete_book(&self, id: BookId) -> Result<serde_json::Value, ApiError>;
}

/// A single route on the books resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookEndpoint {
    List,
    Get(BookId),
    Create,
    Update(BookId),
    Delete(BookId),
}

impl BookEndpoint {
    fn method(&self) -> Method {
        match self {
            BookEndpoint::List | BookEndpoint::Get(_) => Method::GET,
            BookEndpoint::Create => Method::POST,
            BookEndpoint::Update(_) => Method::PUT,
            BookEndpoint::Delete(_) => Method::DELETE,
        }
    }

    fn url(&self, client: &ApiClient) -> String {
        match self {
            BookEndpoint::List | BookEndpoint::Create => client.books_url(),
            BookEndpoint::Get(id) | BookEndpoint::Update(id) | BookEndpoint::Delete(id) => {
                client.book_url(*id)
            }
        }
    }

    /// Only create and update carry a body
    fn content_type(&self) -> Option<&'static str> {
        match self {
            BookEndpoint::Create | BookEndpoint::Update(_) => Some(JSON_CONTENT_TYPE),
            _ => None,
        }
    }
}

/// API client for communicating with the library service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(config::api_base_url())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: config::normalize_base_url(&base_url),
        }
    }

    pub fn books_url(&self) -> String {
        format!("{}/api/Books", self.base_url)
    }

    pub fn book_url(&self, id: BookId) -> String {
        format!("{}/api/Books/{}", self.base_url, id)
    }

    fn request(&self, endpoint: BookEndpoint) -> RequestBuilder {
        let builder = RequestBuilder::new(&endpoint.url(self)).method(endpoint.method());
        match endpoint.content_type() {
            Some(content_type) => builder.header("Content-Type", content_type),
            None => builder,
        }
    }

    async fn send(&self, endpoint: BookEndpoint) -> Result<Response, ApiError> {
        let request = self
            .request(endpoint)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    async fn send_json(&self, endpoint: BookEndpoint, book: &Book) -> Result<Response, ApiError> {
        let body = serde_json::to_string(book).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let request = self
            .request(endpoint)
            .body(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        Self::dispatch(request).await
    }

    async fn dispatch(request: Request) -> Result<Response, ApiError> {
        let line = format!("{} {}", request.method(), request.url());
        Logger::debug_with_component(COMPONENT, &line);
        request.send().await.map_err(|e| {
            let error = ApiError::Network(e.to_string());
            Logger::error_with_component(COMPONENT, &format!("{} failed: {}", line, error));
            error
        })
    }

    async fn read_body<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BookApi for ApiClient {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.send(BookEndpoint::List).await?;
        let books: Vec<Book> = Self::read_body(response).await?.ok_or(ApiError::EmptyBody)?;
        Logger::info_with_component(COMPONENT, &format!("Fetched {} books", books.len()));
        Ok(books)
    }

    async fn get_book(&self, id: BookId) -> Result<Option<Book>, ApiError> {
        let response = self.send(BookEndpoint::Get(id)).await?;
        if response.status() == 404 {
            Logger::info_with_component(COMPONENT, &format!("Book {} not found", id));
            return Ok(None);
        }
        Self::read_body(response).await
    }

    async fn create_book(&self, book: &Book) -> Result<Book, ApiError> {
        let response = self.send_json(BookEndpoint::Create, book).await?;
        let created: Book = Self::read_body(response).await?.ok_or(ApiError::EmptyBody)?;
        Logger::info_with_component(COMPONENT, &format!("Created book {}", created.id));
        Ok(created)
    }

    async fn update_book(&self, book: &Book) -> Result<Book, ApiError> {
        let response = self.send_json(BookEndpoint::Update(book.id), book).await?;
        let updated: Book = Self::read_body(response).await?.ok_or(ApiError::EmptyBody)?;
        Logger::info_with_component(COMPONENT, &format!("Updated book {}", updated.id));
        Ok(updated)
    }

    async fn delete_book(&self, id: BookId) -> Result<serde_json::Value, ApiError> {
        let response = self.send(BookEndpoint::Delete(id)).await?;
        let payload = Self::read_body(response).await?.ok_or(ApiError::EmptyBody)?;
        Logger::info_with_component(COMPONENT, &format!("Deleted book {}", id));
        Ok(payload)
    }
}

/// Turn a raw status and body into a payload.
///
/// Non-2xx statuses fail; an empty body or a JSON `null` yields `Ok(None)`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status });
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body).map_err(|e| ApiError::Parse(e.to_string()))
}


// Building a fetch `Request` needs the browser
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_built_requests_carry_endpoint_method_and_url() {
        let client = ApiClient::with_base_url("http://library.test".to_string());
        let routes = [
            (BookEndpoint::List, Method::GET),
            (BookEndpoint::Get(3), Method::GET),
            (BookEndpoint::Create, Method::POST),
            (BookEndpoint::Update(3), Method::PUT),
            (BookEndpoint::Delete(3), Method::DELETE),
        ];

        for (endpoint, method) in routes {
            let request = client.request(endpoint).build().unwrap();
            assert_eq!(request.method(), method);
            assert_eq!(request.url(), endpoint.url(&client));
            assert_eq!(
                request.headers().get("content-type").as_deref(),
                endpoint.content_type()
            );
        }
    }
}
