use chrono::{DateTime, Local};

use crate::constants::CLOCK_REGION;
use crate::page::Page;

/// Source of the current wall-clock time.
pub trait WallClock: Send {
    fn now(&self) -> DateTime<Local>;
}

/// The real local clock.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Writes the current time, behind a fixed label, into the clock region.
pub struct ClockUpdater {
    label: String,
}

impl ClockUpdater {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn refresh(&self, page: &mut Page, now: DateTime<Local>) {
        let text = format!("{}{}", self.label, now.format("%Y-%m-%d %H:%M:%S"));
        page.set_text(CLOCK_REGION, text);
    }
}

/// Always reports the same instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl WallClock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Advances by a fixed step on every reading.
#[cfg(test)]
pub struct SteppingClock {
    current: std::cell::Cell<DateTime<Local>>,
    step: chrono::Duration,
}

#[cfg(test)]
impl SteppingClock {
    pub fn new(start: DateTime<Local>, step: chrono::Duration) -> Self {
        Self {
            current: std::cell::Cell::new(start),
            step,
        }
    }
}

#[cfg(test)]
impl WallClock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_time(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_refresh_renders_label_and_time() {
        let updater = ClockUpdater::new("System Time: ");
        let mut page = Page::standard();
        updater.refresh(&mut page, local_time(9, 30, 0));

        assert_eq!(
            page.text(CLOCK_REGION),
            Some("System Time: 2024-05-01 09:30:00")
        );
    }

    #[test]
    fn test_refresh_never_renders_an_earlier_time() {
        let clock = SteppingClock::new(local_time(9, 30, 0), chrono::Duration::seconds(1));
        let updater = ClockUpdater::new("System Time: ");
        let mut page = Page::standard();

        updater.refresh(&mut page, clock.now());
        let first = page.text(CLOCK_REGION).unwrap().to_string();
        updater.refresh(&mut page, clock.now());
        let second = page.text(CLOCK_REGION).unwrap().to_string();

        assert_ne!(first, second);
        assert!(second > first);
    }
}
