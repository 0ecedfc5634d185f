//! Lightweight preference storage contracts and in-process adapters.
//!
//! Preferences are plain strings keyed by a well-known name. The desktop keeps exactly one of
//! them (the wallpaper URL), so the contract stays string-typed and does not impose a JSON
//! envelope on stored values.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for string preference values.
pub trait PrefsStore {
    /// Loads the raw value stored under `key`.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing; used by the stub host and on targets without storage.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store. Clones share the same backing map, so a clone behaves like a reload of the
/// same storage area.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Rc::new(RefCell::new(map)),
        }
    }

    /// Returns the stored value for `key` without going through the async contract.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.peek(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Stores `value` under `key`, or deletes the key when `value` is `None`.
///
/// # Errors
///
/// Returns the store's error when the write or delete fails.
pub async fn put_or_clear_pref_with<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
    value: Option<&str>,
) -> Result<(), String> {
    match value {
        Some(value) => store.save_pref(key, value).await,
        None => store.delete_pref(key).await,
    }
}

/// Loads a value, treating an empty string the same as a missing key.
///
/// # Errors
///
/// Returns the store's error when the read fails.
pub async fn load_non_empty_pref_with<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<String>, String> {
    Ok(store
        .load_pref(key)
        .await?
        .filter(|value| !value.is_empty()))
}
