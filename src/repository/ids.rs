//! Millisecond based id generation

use std::sync::{Arc, Mutex};

use chrono::Utc;

/// Issues `<prefix>-<epoch millis>` ids.
///
/// Values are strictly increasing across all prefixes: when the clock has not
/// moved past the last issued value, the last value plus one is used instead.
#[derive(Clone, Default)]
pub struct IdGenerator {
    last: Arc<Mutex<i64>>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, prefix: &str) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = if now > *last { now } else { *last + 1 };
        *last = value;
        format!("{}-{}", prefix, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_distinct_within_a_millisecond() {
        let ids = IdGenerator::new();
        let issued: Vec<String> = (0..1000).map(|_| ids.next("req")).collect();
        let unique: HashSet<&String> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len());
        assert!(issued.iter().all(|id| id.starts_with("req-")));
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let ids = IdGenerator::new();
        let other = ids.clone();
        let a = ids.next("req");
        let b = other.next("req");
        assert_ne!(a, b);
    }
}
