//! Throwaway Product Hunt stand-in for tests, served by rouille on an
//! ephemeral port.
use crate::{config::Credentials, hunt::ProductHunt};
use rouille::{Request, Response, Server};
use serde_json::{json, Value};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

pub const TOKEN: &str = "t0k3n";

/// Starts `handler` on a fresh port and returns its base URL. The server lives
/// until the test process exits.
pub fn serve<F>(handler: F) -> String
where
    F: Send + Sync + 'static + Fn(&Request) -> Response,
{
    let server = Server::new("127.0.0.1:0", handler).expect("bind mock server");
    let address = server.server_addr();
    thread::spawn(move || server.run());
    format!("http://{}", address)
}

pub fn client(base_url: &str) -> ProductHunt {
    client_with_timeout(base_url, Duration::from_secs(2))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> ProductHunt {
    let credentials = Credentials {
        client_id: "test-id".to_owned(),
        client_secret: "test-secret".to_owned(),
    };
    ProductHunt::new(base_url, credentials, timeout)
}

pub fn post_json(author: &str, name: &str, tagline: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "tagline": tagline,
        "votes_count": 42,
        "user": { "id": 7, "name": author, "username": "maker" },
    })
}

/// Wraps a request body in the session and context Alexa sends with it.
pub fn alexa_envelope(request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.0000",
            "application": { "applicationId": "amzn1.ask.skill.0000" },
            "attributes": {},
            "user": { "userId": "amzn1.ask.account.0000" },
        },
        "context": {
            "System": {
                "application": { "applicationId": "amzn1.ask.skill.0000" },
                "user": { "userId": "amzn1.ask.account.0000" },
                "device": {
                    "deviceId": "amzn1.ask.device.0000",
                    "supportedInterfaces": {},
                },
                "apiEndpoint": "https://api.amazonalexa.com",
                "apiAccessToken": "token",
            },
        },
        "request": request,
    })
}

/// Mock of the two endpoints the skill uses, counting how often each is hit.
pub struct MockHunt {
    base_url: String,
    token_hits: Arc<AtomicUsize>,
    posts_hits: Arc<AtomicUsize>,
}

impl MockHunt {
    /// Hands out a token and lists `posts` for any category.
    pub fn ok(posts: Vec<Value>) -> MockHunt {
        MockHunt::start(token_ok, move || Response::json(&json!({ "posts": posts })))
    }

    pub fn with_token<T>(token: T) -> MockHunt
    where
        T: Fn() -> Response + Send + Sync + 'static,
    {
        MockHunt::start(token, || Response::json(&json!({ "posts": [] })))
    }

    pub fn with_posts<P>(posts: P) -> MockHunt
    where
        P: Fn() -> Response + Send + Sync + 'static,
    {
        MockHunt::start(token_ok, posts)
    }

    fn start<T, P>(token: T, posts: P) -> MockHunt
    where
        T: Fn() -> Response + Send + Sync + 'static,
        P: Fn() -> Response + Send + Sync + 'static,
    {
        let token_hits = Arc::new(AtomicUsize::new(0));
        let posts_hits = Arc::new(AtomicUsize::new(0));
        let (token_count, posts_count) = (token_hits.clone(), posts_hits.clone());

        let base_url = serve(move |request| {
            let url = request.url();
            if request.method() == "POST" && url == "/oauth/token" {
                token_count.fetch_add(1, Ordering::SeqCst);
                token()
            } else if request.method() == "GET"
                && url.starts_with("/categories/")
                && url.ends_with("/posts")
            {
                posts_count.fetch_add(1, Ordering::SeqCst);
                if request.header("Authorization") != Some(&format!("Bearer {}", TOKEN)[..]) {
                    return Response::text("unauthorized").with_status_code(401);
                }
                posts()
            } else {
                Response::empty_404()
            }
        });

        MockHunt {
            base_url,
            token_hits,
            posts_hits,
        }
    }

    pub fn client(&self) -> ProductHunt {
        client(&self.base_url)
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> ProductHunt {
        client_with_timeout(&self.base_url, timeout)
    }

    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn posts_hits(&self) -> usize {
        self.posts_hits.load(Ordering::SeqCst)
    }
}

fn token_ok() -> Response {
    Response::json(&json!({
        "access_token": TOKEN,
        "token_type": "bearer",
        "scope": "public",
    }))
}
