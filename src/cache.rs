use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;

use crate::options::SummaryOptions;

/// Cache key for a summary result: one entry per (video, option set).
pub fn summary_key(video_id: &str, options: &SummaryOptions) -> String {
    format!("{video_id}-{}", options.cache_key())
}

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// Bounded in-memory cache with TTL expiry. Expired entries are dropped on
/// read; the oldest entry is evicted when capacity is reached.
pub struct MemoryCache<T> {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> MemoryCache<T> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        MemoryCache {
            ttl,
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!("Cache hit: {key}");
                Some(entry.value.clone())
            }
            Some(_) => {
                debug!("Cache entry expired: {key}");
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: String, value: T) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            entries.retain(|_, e| e.stored_at.elapsed() < self.ttl);
            if entries.len() >= self.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.stored_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    debug!("Cache full, evicting: {oldest}");
                    entries.remove(&oldest);
                }
            }
        }
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
