//! Start/pause/reset lifecycle and frame scheduling
//!
//! A host calls [`Animator::frame`] from its display callback. The demo only
//! advances while the animator is [`RunState::Running`]; pausing simply
//! stops the next frame from ticking.

use crate::demos::Demo;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    /// The start button: pause when running, otherwise start
    Toggle,
    Reset,
    /// Demo-specific action, honoured only while running
    Trigger,
}

impl RunState {
    /// Next state after `command`
    pub fn apply(self, command: Command) -> RunState {
        match (self, command) {
            (_, Command::Reset) => RunState::Idle,
            (_, Command::Start) => RunState::Running,
            (RunState::Running, Command::Pause) => RunState::Paused,
            (state, Command::Pause) => state,
            (RunState::Running, Command::Toggle) => RunState::Paused,
            (_, Command::Toggle) => RunState::Running,
            (state, Command::Trigger) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    /// Label for a start/pause button in this state
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Idle => "Start",
            RunState::Running => "Pause",
            RunState::Paused => "Resume",
        }
    }
}

/// Owns one demo and decides when it ticks
#[derive(Debug)]
pub struct Animator<D> {
    demo: D,
    state: RunState,
    frames: u64,
}

impl<D: Demo> Animator<D> {
    pub fn new(demo: D) -> Self {
        Self {
            demo,
            state: RunState::Idle,
            frames: 0,
        }
    }

    pub fn demo(&self) -> &D {
        &self.demo
    }

    pub fn demo_mut(&mut self) -> &mut D {
        &mut self.demo
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Frames ticked since the last reset
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply a control command; returns whether a trigger fired
    pub fn command(&mut self, command: Command) -> bool {
        let previous = self.state;
        self.state = previous.apply(command);
        debug!(?previous, ?command, next = ?self.state, demo = %self.demo.kind(), "command");

        match command {
            Command::Reset => {
                self.demo.reset();
                self.frames = 0;
                false
            }
            Command::Trigger if previous.is_running() => self.demo.trigger(),
            _ => false,
        }
    }

    /// One host callback: tick the demo if running
    pub fn frame(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.demo.tick();
        self.frames += 1;
        true
    }

    /// Repeat frames until paused, reset, or `limit` frames have run
    ///
    /// `on_frame` runs after each tick and may return a command. The run
    /// flag is checked before every tick, so a pause issued from inside a
    /// frame lets that frame finish and stops the next one.
    pub fn run<F>(&mut self, limit: u64, mut on_frame: F) -> u64
    where
        F: FnMut(&D, u64) -> Option<Command>,
    {
        let mut ran = 0;
        while ran < limit && self.frame() {
            ran += 1;
            if let Some(command) = on_frame(&self.demo, self.frames) {
                self.command(command);
            }
        }
        ran
    }
}
