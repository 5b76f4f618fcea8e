//! Session storage with reversible obfuscation
//!
//! Values stored under secure keys are XOR-ed with a fixed key embedded in
//! the binary and then base64 encoded. This only keeps tokens from being
//! readable at a glance in a storage dump. It is **not** encryption: anyone
//! with the binary can recover the plain text.

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::Mutex;
use thiserror::Error;

const OBFUSCATION_KEY: &[u8] = b"hotel-front-desk:session";

/// Storage key of the auth token
pub const TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored value is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("stored value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn xor(bytes: &mut [u8]) {
    for (b, k) in bytes.iter_mut().zip(OBFUSCATION_KEY.iter().cycle()) {
        *b ^= k;
    }
}

/// XOR with the embedded key, then base64
pub fn obfuscate(plain: &str) -> String {
    let mut bytes = plain.as_bytes().to_vec();
    xor(&mut bytes);
    STANDARD.encode(bytes)
}

/// Reverse of [`obfuscate`]
pub fn deobfuscate(encoded: &str) -> Result<String, StorageError> {
    let mut bytes = STANDARD.decode(encoded)?;
    xor(&mut bytes);
    Ok(String::from_utf8(bytes)?)
}

/// Key-value session storage backend
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.lock().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Session view that obfuscates values stored under secure keys
#[derive(Debug)]
pub struct SecureSession<S: SessionStore + ?Sized = dyn SessionStore> {
    store: Arc<S>,
    secure_keys: Vec<String>,
}

impl<S: SessionStore + ?Sized> Clone for SecureSession<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            secure_keys: self.secure_keys.clone(),
        }
    }
}

impl SecureSession {
    /// Session over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }
}

impl<S: SessionStore + ?Sized> SecureSession<S> {
    /// Wrap `store`; the token key is secure by default
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            secure_keys: vec![TOKEN_KEY.to_string()],
        }
    }

    /// Mark another key as secure
    pub fn with_secure_key(mut self, key: impl Into<String>) -> Self {
        self.secure_keys.push(key.into());
        self
    }

    fn is_secure(&self, key: &str) -> bool {
        self.secure_keys.iter().any(|k| k == key)
    }

    pub fn set_item(&self, key: &str, value: &str) {
        let stored = if self.is_secure(key) {
            obfuscate(value)
        } else {
            value.to_string()
        };
        self.store.set(key, stored);
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.store.get(key) {
            Some(raw) if self.is_secure(key) => deobfuscate(&raw).map(Some),
            other => Ok(other),
        }
    }

    pub fn remove_item(&self, key: &str) {
        self.store.remove(key);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn save_token(&self, token: &str) {
        self.set_item(TOKEN_KEY, token);
    }

    /// Stored token; a corrupted entry is dropped and treated as absent
    pub fn token(&self) -> Option<String> {
        match self.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable auth token");
                self.remove_item(TOKEN_KEY);
                None
            }
        }
    }

    pub fn clear_token(&self) {
        self.remove_item(TOKEN_KEY);
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}
