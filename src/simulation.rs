use std::time::Duration;

use crate::clock::{ClockUpdater, SystemClock, WallClock};
use crate::config::Config;
use crate::counter::CounterTicker;
use crate::emitter::LogEmitter;
use crate::entropy::{Entropy, OsEntropy};
use crate::errors::MirageResult;
use crate::page::Page;
use crate::scheduler::Cadence;

/// The whole simulated telemetry display: three periodic tasks sharing one
/// page. The counter ticker is the only task with state of its own.
pub struct Simulation {
    page: Page,
    ticker: CounterTicker,
    emitter: LogEmitter,
    updater: ClockUpdater,
    clock: Box<dyn WallClock>,
    ticker_cadence: Cadence,
    emitter_cadence: Cadence,
    clock_cadence: Cadence,
}

impl Simulation {
    pub fn new(
        config: &Config,
        counter_entropy: Box<dyn Entropy>,
        emitter_entropy: Box<dyn Entropy>,
        clock: Box<dyn WallClock>,
    ) -> MirageResult<Self> {
        let mut page = Page::standard();

        let ticker = CounterTicker::new(config.start_count, counter_entropy);
        let emitter = LogEmitter::new(config.message_pool.clone(), emitter_entropy)?;
        let updater = ClockUpdater::new(config.clock_label.clone());

        // Seed the display so the first frame is not blank.
        ticker.render(&mut page);
        updater.refresh(&mut page, clock.now());

        Ok(Self {
            page,
            ticker,
            emitter,
            updater,
            clock,
            ticker_cadence: Cadence::from_millis(config.counter_interval_ms),
            emitter_cadence: Cadence::from_millis(config.log_interval_ms),
            clock_cadence: Cadence::from_millis(config.clock_interval_ms),
        })
    }

    /// Production wiring: OS-seeded entropy and the system clock.
    pub fn from_config(config: &Config) -> MirageResult<Self> {
        Self::new(
            config,
            Box::new(OsEntropy::new()),
            Box::new(OsEntropy::new()),
            Box::new(SystemClock),
        )
    }

    /// Advances virtual time by `dt`, firing each task once per completed
    /// period. Tasks run to completion one at a time, in fixed order within a
    /// single call.
    pub fn advance(&mut self, dt: Duration) {
        for _ in 0..self.ticker_cadence.fires(dt) {
            self.ticker.tick(&mut self.page);
        }
        for _ in 0..self.emitter_cadence.fires(dt) {
            let now = self.clock.now();
            self.emitter.emit(&mut self.page, now);
        }
        for _ in 0..self.clock_cadence.fires(dt) {
            let now = self.clock.now();
            self.updater.refresh(&mut self.page, now);
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn counter_value(&self) -> u64 {
        self.ticker.count()
    }
}
