use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use cookie::{Cookie, SameSite};

use crate::now_sec;

pub const SESSION_COOKIE: &str = "session";

/// Maps opaque session tokens to user ids.
pub trait SessionStore: Send + Sync {
    fn create(&self, user_id: i32) -> String;
    fn resolve(&self, token: &str) -> Option<i32>;
    fn revoke(&self, token: &str);
}

struct Entry {
    user_id: i32,
    expires_at: i64,
}

pub struct MemorySessionStore {
    ttl_seconds: i64,
    sessions: Mutex<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new(ttl_seconds: i64) -> Self {
        Self { ttl_seconds, sessions: Mutex::new(HashMap::new()) }
    }

    fn resolve_at(&self, token: &str, now: i64) -> Option<i32> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let &Entry { user_id, expires_at } = sessions.get(token)?;
        if expires_at <= now {
            sessions.remove(token);
            return None;
        }
        Some(user_id)
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, user_id: i32) -> String {
        let now = now_sec();
        let token = uuid::Uuid::new_v4().simple().to_string();
        let entry = Entry { user_id, expires_at: now.saturating_add(self.ttl_seconds) };

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(token.clone(), entry);
        sessions.retain(|_, e| e.expires_at > now);
        token
    }

    fn resolve(&self, token: &str) -> Option<i32> {
        self.resolve_at(token, now_sec())
    }

    fn revoke(&self, token: &str) {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).remove(token);
    }
}

pub fn session_cookie(token: String, ttl_seconds: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
