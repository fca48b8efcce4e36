use sdl2::TimerSubsystem;

/// Millisecond time source.
pub trait Clock {
    fn ticks(&self) -> u32;
}

impl Clock for TimerSubsystem {
    fn ticks(&self) -> u32 {
        TimerSubsystem::ticks(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    Stopped,
    Running { start_ticks: u32 },
    Paused { paused_ticks: u32 },
}

/// Application time based timer that can be paused and resumed.
pub struct Timer<C: Clock> {
    clock: C,
    state: TimerState,
}

impl<C: Clock> Timer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: TimerState::Stopped,
        }
    }

    pub fn start(&mut self) {
        self.state = TimerState::Running {
            start_ticks: self.clock.ticks(),
        };
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    pub fn pause(&mut self) {
        if let TimerState::Running { start_ticks } = self.state {
            self.state = TimerState::Paused {
                paused_ticks: self.clock.ticks().wrapping_sub(start_ticks),
            };
        }
    }

    pub fn unpause(&mut self) {
        if let TimerState::Paused { paused_ticks } = self.state {
            self.state = TimerState::Running {
                start_ticks: self.clock.ticks().wrapping_sub(paused_ticks),
            };
        }
    }

    /// Milliseconds counted so far; 0 while stopped.
    pub fn ticks(&self) -> u32 {
        match self.state {
            TimerState::Stopped => 0,
            TimerState::Running { start_ticks } => self.clock.ticks().wrapping_sub(start_ticks),
            TimerState::Paused { paused_ticks } => paused_ticks,
        }
    }

    pub fn is_started(&self) -> bool {
        self.state != TimerState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, TimerState::Paused { .. })
    }
}
