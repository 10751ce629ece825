use std::time::Instant;

use crate::simulation::Simulation;

pub struct App {
    pub sim: Simulation,
    pub logs_scroll: u16,
    pub paused: bool,
    pub should_quit: bool,
    pub spinner_idx: usize,
    pub last_advance: Instant,
}

impl App {
    pub fn new(sim: Simulation) -> App {
        App {
            sim,
            logs_scroll: 0,
            paused: false,
            should_quit: false,
            spinner_idx: 0,
            last_advance: Instant::now(),
        }
    }

    pub fn scroll_up(&mut self) {
        if self.logs_scroll > 0 {
            self.logs_scroll -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.logs_scroll += 1;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Feeds real elapsed time into the simulation. Time spent paused is
    /// dropped rather than replayed on resume.
    pub fn pump(&mut self) {
        let elapsed = self.last_advance.elapsed();
        self.last_advance = Instant::now();

        if !self.paused {
            self.sim.advance(elapsed);
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }
}
