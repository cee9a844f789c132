use std::time::{Duration, Instant};

/// Holds one value until a fixed time-to-live has elapsed.
///
/// Callers pass `now` explicitly so expiry can be checked against any clock.
#[derive(Debug)]
pub struct TimedCache<T> {
    ttl: Duration,
    entry: Option<(T, Instant)>,
}

impl<T> TimedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Returns the cached value if it has not expired at `now`.
    pub fn get(&self, now: Instant) -> Option<&T> {
        match &self.entry {
            Some((value, expires_at)) if now < *expires_at => Some(value),
            _ => None,
        }
    }

    pub fn insert(&mut self, value: T, now: Instant) -> &T {
        let (value, _) = self.entry.insert((value, now + self.ttl));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_misses() {
        let cache: TimedCache<u32> = TimedCache::new(Duration::from_secs(600));
        assert!(cache.get(Instant::now()).is_none());
    }

    #[test]
    fn test_hit_before_expiry() {
        let start = Instant::now();
        let mut cache = TimedCache::new(Duration::from_secs(600));
        cache.insert("snapshot", start);
        assert_eq!(cache.get(start), Some(&"snapshot"));
        assert_eq!(cache.get(start + Duration::from_secs(599)), Some(&"snapshot"));
    }

    #[test]
    fn test_miss_after_expiry() {
        let start = Instant::now();
        let mut cache = TimedCache::new(Duration::from_secs(600));
        cache.insert(1, start);
        assert!(cache.get(start + Duration::from_secs(600)).is_none());
        assert!(cache.get(start + Duration::from_secs(3600)).is_none());
    }

    #[test]
    fn test_insert_resets_expiry() {
        let start = Instant::now();
        let later = start + Duration::from_secs(700);
        let mut cache = TimedCache::new(Duration::from_secs(600));
        cache.insert(1, start);
        cache.insert(2, later);
        assert_eq!(cache.get(later + Duration::from_secs(10)), Some(&2));
    }
}
