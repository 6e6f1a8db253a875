//! Product Hunt API client.
//!
//! Every lookup is two blocking calls made back to back: trade the client
//! credentials for a bearer token, then fetch the category's posts with it.
//! Neither call is retried and nothing is cached between lookups.
use crate::{category::Category, config::Credentials};
use failure::{bail, format_err, Error, Fail};
use log::{debug, info};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Posts read out per category.
pub const MAX_POSTS: usize = 5;

const USER_AGENT: &str = concat!("product-hunt-skill/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub user: User,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub name: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct PostsResponse {
    #[serde(default)]
    posts: Vec<Post>,
}

#[derive(Debug, Fail)]
pub enum HuntError {
    #[fail(display = "Could not authorize with Product Hunt: {}", inner)]
    Auth { inner: Error },
    #[fail(display = "Product Hunt posts unavailable: {}", inner)]
    Unavailable { inner: Error },
}

#[derive(Debug, Clone)]
pub struct ProductHunt {
    agent: ureq::Agent,
    api_url: String,
    credentials: Credentials,
}

impl ProductHunt {
    pub fn new(api_url: &str, credentials: Credentials, timeout: Duration) -> ProductHunt {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        ProductHunt {
            agent,
            api_url: api_url.trim_end_matches('/').to_owned(),
            credentials,
        }
    }

    /// First `MAX_POSTS` posts for `category`, in the order Product Hunt
    /// returns them.
    pub fn top_posts(&self, category: Category) -> Result<Vec<Post>, Error> {
        let token = self
            .token()
            .map_err(|inner| Error::from(HuntError::Auth { inner }))?;
        debug!("Got access token");

        let mut posts = self
            .posts(category, &token)
            .map_err(|inner| Error::from(HuntError::Unavailable { inner }))?;
        info!("Product Hunt returned {} posts for {}", posts.len(), category);

        posts.truncate(MAX_POSTS);
        Ok(posts)
    }

    fn token(&self) -> Result<String, Error> {
        let url = format!("{}/oauth/token", self.api_url);
        let body = json!({
            "client_id": self.credentials.client_id,
            "client_secret": self.credentials.client_secret,
            "grant_type": "client_credentials",
        });

        let response = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .send_json(body)
            .map_err(|e| format_err!("Token request failed: {}", e))?;
        let response: TokenResponse = response
            .into_json()
            .map_err(|e| format_err!("Could not parse token response: {}", e))?;

        match response.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => bail!("Token response carried no access token"),
        }
    }

    fn posts(&self, category: Category, token: &str) -> Result<Vec<Post>, Error> {
        let url = format!("{}/categories/{}/posts", self.api_url, category);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .set("Authorization", &format!("Bearer {}", token))
            .call()
            .map_err(|e| format_err!("Posts request failed: {}", e))?;
        let response: PostsResponse = response
            .into_json()
            .map_err(|e| format_err!("Could not parse posts response: {}", e))?;

        if response.posts.is_empty() {
            bail!("No posts listed for {}", category);
        }
        Ok(response.posts)
    }
}
