// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded gallery images.
//!
//! Images are keyed by their resolved asset URL, so the same thumbnail seen
//! from the library list and from a detail page is only downloaded once.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown images go first
//! - **Count-bounded**: capacity comes from `[gallery] image_cache_entries`,
//!   grown when one screen wants more images than that at once
//! - **Failures are remembered**: a URL that failed is marked so the view can
//!   show a placeholder instead of refetching on every frame

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Smallest accepted cache capacity.
pub const MIN_CACHE_ENTRIES: usize = 8;

/// Largest accepted cache capacity.
pub const MAX_CACHE_ENTRIES: usize = 512;

/// State of one cached asset.
#[derive(Debug, Clone)]
pub enum CachedImage {
    /// Fetch issued, bytes not there yet.
    Loading,
    Ready(Handle),
    Failed,
}

/// Hit/miss counters, mostly for debug logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Image handle cache keyed by asset URL.
pub struct ImageCache {
    entries: LruCache<String, CachedImage>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` images (clamped to
    /// [`MIN_CACHE_ENTRIES`]..=[`MAX_CACHE_ENTRIES`]).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(MIN_CACHE_ENTRIES, MAX_CACHE_ENTRIES);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Looks up `url` without touching the LRU order.
    ///
    /// Used from `view`, which only has shared access to the state.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CachedImage> {
        self.entries.peek(url)
    }

    /// Returns the ready handle for `url`, if any.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.entries.peek(url) {
            Some(CachedImage::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Grows the cache so `count` images fit at once. Never shrinks.
    pub fn ensure_capacity(&mut self, count: usize) {
        let Some(wanted) = NonZeroUsize::new(count) else {
            return;
        };
        if wanted > self.entries.cap() {
            tracing::debug!(from = self.capacity(), to = count, "growing image cache");
            self.entries.resize(wanted);
        }
    }

    /// Marks `url` as being fetched.
    ///
    /// Returns `true` when the caller should issue the fetch, i.e. the URL was
    /// neither cached nor already in flight. Known URLs are promoted to
    /// most-recently-used.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            self.stats.hits += 1;
            return false;
        }
        self.stats.misses += 1;
        self.put(url.to_owned(), CachedImage::Loading);
        true
    }

    /// Stores decoded bytes for `url`.
    pub fn insert_bytes(&mut self, url: String, bytes: Vec<u8>) {
        self.put(url, CachedImage::Ready(Handle::from_bytes(bytes)));
    }

    /// Records that fetching `url` failed.
    pub fn mark_failed(&mut self, url: String) {
        self.put(url, CachedImage::Failed);
    }

    /// Drops a pending entry whose result will never be stored, so a later
    /// `begin_fetch` issues the request again.
    pub fn abandon(&mut self, url: &str) {
        if matches!(self.entries.peek(url), Some(CachedImage::Loading)) {
            self.entries.pop(url);
        }
    }

    /// Forgets a failed entry so the next `begin_fetch` retries it.
    pub fn forget_failed(&mut self) {
        let failed: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| matches!(entry, CachedImage::Failed))
            .map(|(url, _)| url.clone())
            .collect();
        for url in failed {
            self.entries.pop(&url);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn put(&mut self, url: String, entry: CachedImage) {
        if let Some((evicted, _)) = self.entries.push(url.clone(), entry) {
            if evicted != url {
                self.stats.evictions += 1;
                tracing::trace!(url = %evicted, "image evicted from cache");
            }
        }
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity())
            .field("stats", &self.stats)
            .finish()
    }
}
