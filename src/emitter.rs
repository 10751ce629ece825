use chrono::{DateTime, Local};

use crate::constants::LOG_REGION;
use crate::entropy::Entropy;
use crate::errors::{MirageError, MirageResult};
use crate::page::Page;

/// Prepends a randomly chosen canned line, stamped with the current time, to
/// the log region. Entries accumulate for the lifetime of the page.
pub struct LogEmitter {
    pool: Vec<String>,
    entropy: Box<dyn Entropy>,
}

impl LogEmitter {
    /// The pool is fixed for the emitter's lifetime. An empty pool is a
    /// startup configuration error, never a per-tick one.
    pub fn new(pool: Vec<String>, entropy: Box<dyn Entropy>) -> MirageResult<Self> {
        if pool.is_empty() {
            return Err(MirageError::config_error("message pool must not be empty"));
        }
        Ok(Self { pool, entropy })
    }

    pub fn emit(&mut self, page: &mut Page, now: DateTime<Local>) {
        let line = &self.pool[self.entropy.pick(self.pool.len())];
        let entry = format!("[{}] {}", now.format("%H:%M:%S"), line);
        page.prepend_line(LOG_REGION, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, WallClock};
    use crate::entropy::{OsEntropy, ScriptedEntropy};
    use chrono::TimeZone;

    fn pool() -> Vec<String> {
        vec![
            "[INFO] Navigating to Target URL...".to_string(),
            "[SUCCESS] JSON payload captured.".to_string(),
            "[AWS] Pushing records to PostgreSQL...".to_string(),
        ]
    }

    fn nine_thirty() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_pool_is_rejected_at_construction() {
        let result = LogEmitter::new(Vec::new(), Box::new(OsEntropy::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_carries_timestamp_prefix_and_pool_line() {
        let clock = FixedClock(nine_thirty());
        let mut emitter =
            LogEmitter::new(pool(), Box::new(ScriptedEntropy::new(vec![1]))).unwrap();
        let mut page = Page::standard();

        emitter.emit(&mut page, clock.now());

        let lines = page.lines(LOG_REGION).unwrap();
        assert_eq!(lines[0], "[09:30:00] [SUCCESS] JSON payload captured.");
    }

    #[test]
    fn test_every_entry_suffix_is_a_pool_member() {
        let clock = FixedClock(nine_thirty());
        let mut emitter = LogEmitter::new(pool(), Box::new(OsEntropy::new())).unwrap();
        let mut page = Page::standard();

        for _ in 0..50 {
            emitter.emit(&mut page, clock.now());
        }

        let expected = pool();
        for line in page.lines(LOG_REGION).unwrap() {
            let suffix = line.strip_prefix("[09:30:00] ").unwrap();
            assert!(expected.iter().any(|canned| canned == suffix));
        }
    }

    #[test]
    fn test_newest_entry_renders_first() {
        let clock = FixedClock(nine_thirty());
        let mut emitter =
            LogEmitter::new(pool(), Box::new(ScriptedEntropy::new(vec![0, 2]))).unwrap();
        let mut page = Page::standard();

        emitter.emit(&mut page, clock.now());
        emitter.emit(&mut page, clock.now());

        let lines = page.lines(LOG_REGION).unwrap();
        assert!(lines[0].ends_with("[AWS] Pushing records to PostgreSQL..."));
        assert!(lines[1].ends_with("[INFO] Navigating to Target URL..."));
    }

    #[test]
    fn test_entries_are_never_pruned() {
        let clock = FixedClock(nine_thirty());
        let mut emitter = LogEmitter::new(pool(), Box::new(OsEntropy::new())).unwrap();
        let mut page = Page::standard();

        for _ in 0..500 {
            emitter.emit(&mut page, clock.now());
        }

        assert_eq!(page.lines(LOG_REGION).unwrap().len(), 500);
    }
}
