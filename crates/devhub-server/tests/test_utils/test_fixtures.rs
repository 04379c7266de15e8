//! Shared fixtures for API tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use devhub_domain::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use devhub_domain::error::{Error, Result};
use devhub_domain::ports::infrastructure::{AuthClaims, TokenVerifier};
use devhub_domain::ports::providers::DocumentStoreProvider;
use devhub_domain::value_objects::TextPattern;
use devhub_infrastructure::AppContext;
use devhub_infrastructure::auth::{JwtTokenVerifier, NullTokenVerifier};
use devhub_infrastructure::config::AppConfig;
use devhub_providers::document_store::InMemoryDocumentStore;
use devhub_server::build_rocket;
use jsonwebtoken::{EncodingKey, Header, encode};
use rocket::local::asynchronous::Client;

pub const SECRET: &str = "integration-secret-with-32-plus-chars";

/// In-memory store that counts lookups and can be told to fail
pub struct SpyStore {
    inner: InMemoryDocumentStore,
    calls: AtomicUsize,
    fail: bool,
}

impl SpyStore {
    pub fn new(inner: InMemoryDocumentStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(InMemoryDocumentStore::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::database("connection refused: mongodb://10.0.0.5"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStoreProvider for SpyStore {
    async fn find_users(&self, patterns: &[TextPattern], limit: usize) -> Result<Vec<User>> {
        self.hit()?;
        self.inner.find_users(patterns, limit).await
    }

    async fn find_repositories(
        &self,
        pattern: &TextPattern,
        limit: usize,
    ) -> Result<Vec<Repository>> {
        self.hit()?;
        self.inner.find_repositories(pattern, limit).await
    }

    async fn find_store_items(
        &self,
        pattern: &TextPattern,
        limit: usize,
    ) -> Result<Vec<StoreItem>> {
        self.hit()?;
        self.inner.find_store_items(pattern, limit).await
    }

    async fn find_ideas(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Idea>> {
        self.hit()?;
        self.inner.find_ideas(pattern, limit).await
    }

    async fn find_resources(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Resource>> {
        self.hit()?;
        self.inner.find_resources(pattern, limit).await
    }

    async fn find_news(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<NewsArticle>> {
        self.hit()?;
        self.inner.find_news(pattern, limit).await
    }

    async fn find_events(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Event>> {
        self.hit()?;
        self.inner.find_events(pattern, limit).await
    }

    fn provider_name(&self) -> &str {
        "spy"
    }
}

/// Store holding the "Zen" scenario plus a little noise
pub fn zen_store() -> InMemoryDocumentStore {
    let store = InMemoryDocumentStore::new();
    store.insert_user(User::new("u1", "zenmaster").with_display_name("Zen Master"));
    store.insert_user(User::new("u2", "alice").with_display_name("Alice"));
    store.insert_repository(
        Repository::new("r1", "zen-garden").with_description("Calm code"),
    );
    store.insert_repository(Repository::new("r2", "the-zen-tool"));
    store.insert_idea(Idea::new("i1", "Something else"));
    store.insert_news(NewsArticle::new("n1", "Zen weekly").with_excerpt("Issue 1"));
    store
}

/// Build a Rocket client around `store` and `verifier`
pub async fn client_with(
    store: Arc<dyn DocumentStoreProvider>,
    verifier: Arc<dyn TokenVerifier>,
) -> Client {
    let context = AppContext::from_parts(AppConfig::default(), store, verifier);
    Client::tracked(build_rocket(context))
        .await
        .expect("valid rocket instance")
}

/// Client over `store` with JWT verification enabled
pub async fn client_for(store: Arc<dyn DocumentStoreProvider>) -> Client {
    client_with(store, Arc::new(JwtTokenVerifier::new(SECRET, None))).await
}

/// Client with authentication disabled
pub async fn client_without_auth(store: Arc<dyn DocumentStoreProvider>) -> Client {
    client_with(store, Arc::new(NullTokenVerifier::new())).await
}

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs()
}

/// Sign a token for `sub` expiring `ttl_secs` from now (negative for expired)
pub fn token_for(sub: &str, ttl_secs: i64) -> String {
    let exp = now().saturating_add_signed(ttl_secs);
    let claims = AuthClaims {
        sub: sub.to_string(),
        username: Some("zenmaster".to_string()),
        exp,
        iat: Some(now()),
        iss: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token should encode")
}
