use crate::ports::outbound::{AttributeMeta, CatalogClient};
use crate::shared::Result;
use dashmap::DashMap;

/// CachingAttributeResolver - resolves attribute references with a
/// run-lifetime cache
///
/// The first lookup of a token calls the catalog server; every later
/// lookup of the same token is answered from the cache, so one report
/// run issues at most one remote resolve per distinct token. The cache
/// grows monotonically and is never evicted; it lives exactly as long
/// as the resolver, which is constructed per run to keep runs
/// test-isolated.
///
/// Failed resolutions are not cached: a token that failed once is
/// retried when another component references it.
pub struct CachingAttributeResolver<'a, C> {
    client: &'a C,
    cache: DashMap<String, AttributeMeta>,
}

impl<'a, C: CatalogClient> CachingAttributeResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            cache: DashMap::new(),
        }
    }

    /// Resolves an attribute reference token to its definition metadata.
    ///
    /// # Errors
    /// Propagates the remote failure on a cache miss. Callers treat this
    /// as "skip this attribute"; it must never abort report generation.
    pub async fn resolve(&self, token: &str) -> Result<AttributeMeta> {
        if let Some(cached) = self.cache.get(token) {
            return Ok(cached.clone());
        }

        let meta = self.client.resolve_attribute(token).await?;
        self.cache.insert(token.to_string(), meta.clone());

        Ok(meta)
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
