//! Chapter 7: Fetching JSON over HTTP
//!
//! One GET, then one body decode, in that order. There is no retry and no
//! timeout: a failed request or a malformed payload comes back as a
//! [`FetchError`] and the caller decides what to do with it.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn author(&self) -> String {
        if self.user_id == 1 {
            "Administrator".to_string()
        } else {
            self.user_id.to_string()
        }
    }

    /// The four console lines shown for a post.
    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Post #{}", self.id),
            format!("Author: {}", self.author()),
            format!("Title: {}", self.title),
            format!("Body: {}", self.body),
        ]
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} error for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response contained no posts")]
    NoPosts,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }

        if let Some(status) = err.status() {
            return FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }

        FetchError::Network(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PostsClient {
    client: Client,
    url: String,
}

impl PostsClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "requesting posts");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let text = self.fetch_body().await?;
        let posts: Vec<Post> =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;
        info!(count = posts.len(), "decoded posts");
        Ok(posts)
    }

    /// Decodes only the head of the array; later elements are not inspected.
    pub async fn first_post(&self) -> Result<Post, FetchError> {
        let text = self.fetch_body().await?;
        decode_first_post(&text)
    }
}

/// Elements stay raw JSON until the head is picked, so a malformed tail
/// cannot fail it. A non-array payload is still a decode error.
fn decode_first_post(text: &str) -> Result<Post, FetchError> {
    let items: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))?;
    let head = items.into_iter().next().ok_or(FetchError::NoPosts)?;
    serde_json::from_value(head).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn sample_posts() -> serde_json::Value {
        serde_json::json!([
            { "userId": 1, "id": 1, "title": "first", "body": "hello" },
            { "userId": 2, "id": 2, "title": "second", "body": "world" }
        ])
    }

    #[test]
    fn test_render_lines() {
        let post = Post {
            user_id: 1,
            id: 1,
            title: "first".into(),
            body: "hello".into(),
        };
        assert_eq!(
            post.render(),
            vec!["Post #1", "Author: Administrator", "Title: first", "Body: hello"]
        );

        let guest = Post {
            user_id: 7,
            ..post
        };
        assert_eq!(guest.author(), "7");
    }

    #[tokio::test]
    async fn test_first_post_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts()))
            .expect(1)
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        let post = client.first_post().await.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "first");
    }

    #[tokio::test]
    async fn test_first_post_ignores_malformed_tail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "userId": 1, "id": 1, "title": "first", "body": "hello" },
                { "userId": 1, "id": 2, "title": "no body" }
            ])))
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        let post = client.first_post().await.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.body, "hello");

        // the full list still rejects the malformed element
        assert!(matches!(client.fetch_posts().await, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_first_post_rejects_bad_head() {
        let bad_head = r#"[{"userId":1,"id":1,"title":"no body"},{"userId":1,"id":2,"title":"t","body":"b"}]"#;
        assert!(matches!(decode_first_post(bad_head), Err(FetchError::Decode(_))));
        assert!(matches!(decode_first_post(r#"{"id":1}"#), Err(FetchError::Decode(_))));
        assert!(matches!(decode_first_post("[]"), Err(FetchError::NoPosts)));
    }

    #[tokio::test]
    async fn test_fetch_posts_decodes_all() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts()))
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        let posts = client.fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].author(), "2");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        match client.first_post().await {
            Err(FetchError::Status { status, url }) => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/posts"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        assert!(matches!(client.fetch_posts().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 1 })),
            )
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        assert!(matches!(client.first_post().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_empty_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = PostsClient::new(format!("{}/posts", server.uri()));
        assert!(matches!(client.first_post().await, Err(FetchError::NoPosts)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = PostsClient::new("http://127.0.0.1:1/posts");
        assert!(matches!(client.fetch_posts().await, Err(FetchError::Network(_))));
    }
}
