use crate::constants::{COUNTER_REGION, MAX_COUNTER_STEP};
use crate::entropy::Entropy;
use crate::page::Page;
use crate::utils::group_digits;

/// Owns the running record total and bumps it by a bounded random step on
/// each tick. The total never decreases.
pub struct CounterTicker {
    count: u64,
    entropy: Box<dyn Entropy>,
}

impl CounterTicker {
    pub fn new(start: u64, entropy: Box<dyn Entropy>) -> Self {
        Self {
            count: start,
            entropy,
        }
    }

    /// One tick: add a step in [0, MAX_COUNTER_STEP] to the total, then
    /// render it into the counter region.
    pub fn tick(&mut self, page: &mut Page) {
        let step = self.entropy.pick(MAX_COUNTER_STEP as usize + 1) as u64;
        self.count += step;
        self.render(page);
    }

    /// Writes the current total without advancing it.
    pub fn render(&self, page: &mut Page) {
        page.set_text(COUNTER_REGION, group_digits(self.count));
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
