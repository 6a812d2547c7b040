use portfolio_core::{
    AssetCachePolicy, AssetCacheStorage, AssetNetwork, AssetResponse, AssetSource, FetchError,
    MemoryCacheStorage, OfflineError,
};
use std::cell::Cell;
use std::collections::BTreeMap;

/// Scripted network: serves known urls while online, 404 for unknown ones.
#[derive(Default)]
struct FakeNetwork {
    assets: BTreeMap<String, AssetResponse>,
    offline: Cell<bool>,
    fetches: Cell<usize>,
}

impl FakeNetwork {
    fn serving(urls: &[&str]) -> Self {
        let assets = urls
            .iter()
            .map(|url| (url.to_string(), AssetResponse::ok(*url, format!("body of {url}"))))
            .collect();
        Self {
            assets,
            ..Self::default()
        }
    }
}

impl AssetNetwork for FakeNetwork {
    fn fetch(&self, url: &str) -> Result<AssetResponse, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        if self.offline.get() {
            return Err(FetchError {
                url: url.to_string(),
                message: "network unreachable".to_string(),
            });
        }
        Ok(self.assets.get(url).cloned().unwrap_or(AssetResponse {
            url: url.to_string(),
            status: 404,
            body: Vec::new(),
        }))
    }
}

#[test]
fn install_caches_every_precache_path() {
    let policy = AssetCachePolicy::new("site-v2", ["/", "/app.js"]);
    let network = FakeNetwork::serving(&["/", "/app.js"]);
    let mut storage = MemoryCacheStorage::new();

    assert_eq!(policy.install(&network, &mut storage).unwrap(), 2);
    assert_eq!(storage.entry_count("site-v2"), 2);
    assert_eq!(
        storage.lookup("site-v2", "/app.js").unwrap().body,
        b"body of /app.js".to_vec()
    );
}

#[test]
fn install_is_all_or_nothing() {
    let policy = AssetCachePolicy::new("site-v2", ["/", "/missing.css"]);
    let network = FakeNetwork::serving(&["/"]);
    let mut storage = MemoryCacheStorage::new();

    let err = policy.install(&network, &mut storage).unwrap_err();
    assert_eq!(
        err,
        OfflineError::BadStatus {
            url: "/missing.css".to_string(),
            status: 404,
        }
    );
    assert!(storage.cache_names().is_empty());

    network.offline.set(true);
    let err = policy.install(&network, &mut storage).unwrap_err();
    assert!(matches!(err, OfflineError::Fetch(_)));
    assert!(storage.cache_names().is_empty());
}

#[test]
fn activate_evicts_other_versions() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let mut storage = MemoryCacheStorage::new();
    storage.put("site-v1", "/", AssetResponse::ok("/", "old"));
    storage.put("site-v2", "/", AssetResponse::ok("/", "new"));
    storage.put("fonts", "/font.woff2", AssetResponse::ok("/font.woff2", "font"));

    let evicted = policy.activate(&mut storage);
    assert_eq!(evicted, vec!["fonts".to_string(), "site-v1".to_string()]);
    assert_eq!(storage.cache_names(), vec!["site-v2".to_string()]);
}

#[test]
fn respond_prefers_network() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let network = FakeNetwork::serving(&["/"]);
    let mut storage = MemoryCacheStorage::new();
    storage.put("site-v2", "/", AssetResponse::ok("/", "cached"));

    let served = policy.respond("/", &network, &storage).unwrap();
    assert_eq!(served.source, AssetSource::Network);
    assert_eq!(served.response.body, b"body of /".to_vec());
}

#[test]
fn respond_passes_through_network_error_statuses() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let network = FakeNetwork::serving(&[]);
    let mut storage = MemoryCacheStorage::new();
    storage.put("site-v2", "/gone", AssetResponse::ok("/gone", "cached"));

    let served = policy.respond("/gone", &network, &storage).unwrap();
    assert_eq!(served.source, AssetSource::Network);
    assert_eq!(served.response.status, 404);
}

#[test]
fn respond_falls_back_to_current_cache_when_offline() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let network = FakeNetwork::serving(&["/"]);
    let mut storage = MemoryCacheStorage::new();
    policy.install(&network, &mut storage).unwrap();
    storage.put("site-v1", "/old.js", AssetResponse::ok("/old.js", "stale"));
    network.offline.set(true);

    let served = policy.respond("/", &network, &storage).unwrap();
    assert_eq!(served.source, AssetSource::Cache);
    assert_eq!(served.response.body, b"body of /".to_vec());

    let err = policy.respond("/old.js", &network, &storage).unwrap_err();
    assert_eq!(
        err,
        OfflineError::Unavailable {
            url: "/old.js".to_string()
        }
    );
}

#[test]
fn install_keys_entries_by_requested_path_after_redirect() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let mut network = FakeNetwork::default();
    network.assets.insert(
        "/".to_string(),
        AssetResponse::ok("/index.html", "shell"),
    );
    let mut storage = MemoryCacheStorage::new();

    policy.install(&network, &mut storage).unwrap();
    assert!(storage.lookup("site-v2", "/index.html").is_none());
    network.offline.set(true);

    let served = policy.respond("/", &network, &storage).unwrap();
    assert_eq!(served.source, AssetSource::Cache);
    assert_eq!(served.response.url, "/index.html");
    assert_eq!(served.response.body, b"shell".to_vec());
}

#[test]
fn respond_never_writes_to_cache() {
    let policy = AssetCachePolicy::new("site-v2", ["/"]);
    let network = FakeNetwork::serving(&["/fresh.js"]);
    let storage = MemoryCacheStorage::new();

    policy.respond("/fresh.js", &network, &storage).unwrap();
    assert_eq!(network.fetches.get(), 1);
    assert_eq!(storage.entry_count("site-v2"), 0);
}

#[test]
fn site_default_uses_versioned_cache() {
    let policy = AssetCachePolicy::site_default();
    assert!(policy.cache_name.starts_with("portfolio-cache-"));
    assert!(policy.precache.iter().any(|url| url == "/index.html"));
}
