//! Host-agnostic asset cache contracts and policy.

use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Versioned cache name for the current site build.
pub const SITE_CACHE_NAME: &str = "portfolio-cache-v1";

const SITE_PRECACHE: &[&str] = &[
    "/",
    "/index.html",
    "/manifest.json",
    "/favicon.ico",
    "/static/js/main.js",
    "/static/css/main.css",
];

/// A fetched or cached asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    pub body: Vec<u8>,
}

impl AssetResponse {
    pub fn ok(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where a served asset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Network,
    Cache,
}

/// Asset handed back by [`AssetCachePolicy::respond`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedAsset {
    pub response: AssetResponse,
    pub source: AssetSource,
}

/// Transport-level fetch failure (no response at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch `{}` failed: {}", self.url, self.message)
    }
}

impl Error for FetchError {}

/// Offline layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfflineError {
    /// A precache request failed at the transport level.
    Fetch(FetchError),
    /// A precache request returned a non-2xx status.
    BadStatus { url: String, status: u16 },
    /// Neither network nor cache could serve the asset.
    Unavailable { url: String },
}

impl Display for OfflineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::BadStatus { url, status } => {
                write!(f, "precache `{url}` returned status {status}")
            }
            Self::Unavailable { url } => write!(f, "asset unavailable offline: `{url}`"),
        }
    }
}

impl Error for OfflineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FetchError> for OfflineError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// Network side of the asset layer.
pub trait AssetNetwork {
    fn fetch(&self, url: &str) -> Result<AssetResponse, FetchError>;
}

/// Named cache storage side of the asset layer.
pub trait AssetCacheStorage {
    fn cache_names(&self) -> Vec<String>;
    fn lookup(&self, cache_name: &str, url: &str) -> Option<AssetResponse>;
    /// Stores `response` under the requested `url`, creating the cache when
    /// missing. The key is the request, not `response.url`, which may differ
    /// after a redirect.
    fn put(&mut self, cache_name: &str, url: &str, response: AssetResponse);
    /// Returns whether a cache was removed.
    fn delete_cache(&mut self, cache_name: &str) -> bool;
}

/// In-memory cache storage keyed by cache name, then url.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCacheStorage {
    caches: BTreeMap<String, BTreeMap<String, AssetResponse>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in one cache; `0` when the cache does not exist.
    pub fn entry_count(&self, cache_name: &str) -> usize {
        self.caches.get(cache_name).map_or(0, BTreeMap::len)
    }
}

impl AssetCacheStorage for MemoryCacheStorage {
    fn cache_names(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    fn lookup(&self, cache_name: &str, url: &str) -> Option<AssetResponse> {
        self.caches.get(cache_name)?.get(url).cloned()
    }

    fn put(&mut self, cache_name: &str, url: &str, response: AssetResponse) {
        self.caches
            .entry(cache_name.to_string())
            .or_default()
            .insert(url.to_string(), response);
    }

    fn delete_cache(&mut self, cache_name: &str) -> bool {
        self.caches.remove(cache_name).is_some()
    }
}

/// Precache list plus the cache name it installs into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCachePolicy {
    pub cache_name: String,
    pub precache: Vec<String>,
}

impl AssetCachePolicy {
    pub fn new<I, S>(cache_name: impl Into<String>, precache: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cache_name: cache_name.into(),
            precache: precache.into_iter().map(Into::into).collect(),
        }
    }

    /// Site shell assets under [`SITE_CACHE_NAME`].
    pub fn site_default() -> Self {
        Self::new(SITE_CACHE_NAME, SITE_PRECACHE.iter().copied())
    }

    /// Fetches every precache path and stores them in `cache_name`.
    ///
    /// Returns the number of cached entries.
    ///
    /// # Errors
    /// - `Fetch` or `BadStatus` for the first failing path; nothing is
    ///   written in that case.
    pub fn install<N, C>(&self, network: &N, storage: &mut C) -> Result<usize, OfflineError>
    where
        N: AssetNetwork + ?Sized,
        C: AssetCacheStorage + ?Sized,
    {
        let mut fetched = Vec::with_capacity(self.precache.len());
        for url in &self.precache {
            let response = match network.fetch(url) {
                Ok(response) => response,
                Err(err) => {
                    warn!(
                        "event=asset_install module=offline status=error cache={} error={}",
                        self.cache_name, err
                    );
                    return Err(err.into());
                }
            };
            if !response.is_success() {
                warn!(
                    "event=asset_install module=offline status=error cache={} bad_status={}",
                    self.cache_name, response.status
                );
                return Err(OfflineError::BadStatus {
                    url: url.clone(),
                    status: response.status,
                });
            }
            fetched.push((url, response));
        }

        let count = fetched.len();
        for (url, response) in fetched {
            storage.put(&self.cache_name, url, response);
        }
        info!(
            "event=asset_install module=offline status=ok cache={} entries={}",
            self.cache_name, count
        );
        Ok(count)
    }

    /// Deletes every cache not named `cache_name`; returns evicted names.
    pub fn activate<C>(&self, storage: &mut C) -> Vec<String>
    where
        C: AssetCacheStorage + ?Sized,
    {
        let stale = storage
            .cache_names()
            .into_iter()
            .filter(|name| *name != self.cache_name)
            .collect::<Vec<_>>();

        let evicted = stale
            .into_iter()
            .filter(|name| storage.delete_cache(name))
            .collect::<Vec<_>>();
        info!(
            "event=asset_activate module=offline status=ok cache={} evicted={}",
            self.cache_name,
            evicted.len()
        );
        evicted
    }

    /// Serves `url` from the network, falling back to the current cache.
    ///
    /// Any network response, including non-2xx, is returned as-is. Only a
    /// transport failure triggers the cache fallback.
    pub fn respond<N, C>(
        &self,
        url: &str,
        network: &N,
        storage: &C,
    ) -> Result<ServedAsset, OfflineError>
    where
        N: AssetNetwork + ?Sized,
        C: AssetCacheStorage + ?Sized,
    {
        match network.fetch(url) {
            Ok(response) => Ok(ServedAsset {
                response,
                source: AssetSource::Network,
            }),
            Err(err) => match storage.lookup(&self.cache_name, url) {
                Some(response) => {
                    info!(
                        "event=asset_respond module=offline status=fallback cache={}",
                        self.cache_name
                    );
                    Ok(ServedAsset {
                        response,
                        source: AssetSource::Cache,
                    })
                }
                None => {
                    warn!(
                        "event=asset_respond module=offline status=error cache={} error={}",
                        self.cache_name, err
                    );
                    Err(OfflineError::Unavailable {
                        url: url.to_string(),
                    })
                }
            },
        }
    }
}
