use std::collections::HashMap;

use crate::constants::{CLOCK_REGION, COUNTER_REGION, LOG_REGION};

/// A named text area of the page. Counter and clock regions hold a single
/// line; the log region accumulates one line per entry, newest first.
#[derive(Debug, Default)]
pub struct Region {
    lines: Vec<String>,
}

/// The surface the simulation writes into: named regions keyed by fixed
/// identifiers. The host constructs the page; tasks only ever write text.
#[derive(Debug)]
pub struct Page {
    regions: HashMap<String, Region>,
}

impl Page {
    pub fn new(ids: &[&str]) -> Self {
        let regions = ids
            .iter()
            .map(|id| (id.to_string(), Region::default()))
            .collect();
        Self { regions }
    }

    /// A page carrying the three regions the simulation expects.
    pub fn standard() -> Self {
        Self::new(&[COUNTER_REGION, LOG_REGION, CLOCK_REGION])
    }

    /// Replaces the region's content with a single line. A missing region is
    /// skipped with a warning; the other tasks keep running.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        match self.regions.get_mut(id) {
            Some(region) => {
                region.lines.clear();
                region.lines.push(text.into());
            }
            None => log::warn!("skipped write to missing region '{}'", id),
        }
    }

    /// Inserts a line at the top of the region, so the newest entry always
    /// renders first.
    pub fn prepend_line(&mut self, id: &str, line: impl Into<String>) {
        match self.regions.get_mut(id) {
            Some(region) => region.lines.insert(0, line.into()),
            None => log::warn!("skipped write to missing region '{}'", id),
        }
    }

    /// The current text of a single-line region, if it exists and has been
    /// written to.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.regions
            .get(id)
            .and_then(|region| region.lines.first())
            .map(String::as_str)
    }

    pub fn lines(&self, id: &str) -> Option<&[String]> {
        self.regions.get(id).map(|region| region.lines.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_replaces_content() {
        let mut page = Page::standard();
        page.set_text(COUNTER_REGION, "850");
        page.set_text(COUNTER_REGION, "854");

        assert_eq!(page.text(COUNTER_REGION), Some("854"));
        assert_eq!(page.lines(COUNTER_REGION).unwrap().len(), 1);
    }

    #[test]
    fn test_prepend_line_keeps_newest_first() {
        let mut page = Page::standard();
        page.prepend_line(LOG_REGION, "first");
        page.prepend_line(LOG_REGION, "second");

        let lines = page.lines(LOG_REGION).unwrap();
        assert_eq!(lines, &["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn test_write_to_missing_region_is_skipped() {
        let mut page = Page::new(&[LOG_REGION]);
        page.set_text(COUNTER_REGION, "850");
        page.prepend_line(CLOCK_REGION, "tick");

        assert_eq!(page.text(COUNTER_REGION), None);
        assert_eq!(page.lines(CLOCK_REGION), None);
        assert_eq!(page.lines(LOG_REGION).unwrap().len(), 0);
    }
}
