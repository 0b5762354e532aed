//! Fixed-timestep loop driving a [`Game`] on the terminal

use crate::input::{Control, HoldTimeouts, InputPump};
use crate::surface::Surface;
use arcade_core::{
    Clock, Color, Error, FixedStep, Frame, Game, GameEvent, KeyEvent, Result, TextSize, Tick,
};
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Loop settings
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Render rate cap
    pub fps: u32,
    /// Ticks allowed back-to-back after a stall
    pub max_catch_up: u32,
    pub hold: HoldTimeouts,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            max_catch_up: FixedStep::DEFAULT_MAX_CATCH_UP,
            hold: HoldTimeouts::default(),
        }
    }
}

impl RunOptions {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// What happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Score when the player quit
    pub score: u32,
    /// Best score over all rounds
    pub best_score: u32,
    pub ticks: Tick,
    pub rounds: u32,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            rounds: 1,
            ..Self::default()
        }
    }

    /// Fold game events into the summary
    pub fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GameOver { score } => self.best_score = self.best_score.max(*score),
                GameEvent::Restarted => self.rounds += 1,
                _ => {}
            }
        }
    }
}

fn term_err(e: io::Error) -> Error {
    Error::Terminal(e.to_string())
}

fn log_events(events: &[GameEvent], tick: Tick) {
    for event in events {
        match event {
            GameEvent::GameOver { .. } | GameEvent::Restarted => info!(tick, "{}", event),
            _ => debug!(tick, "{}", event),
        }
    }
}

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard {
    out: Stdout,
    enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(term_err)?;
        // from here on every early return restores the terminal through Drop
        let mut guard = Self {
            out: io::stdout(),
            enhanced: false,
        };
        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All)
        )
        .map_err(term_err)?;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                guard.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .map_err(term_err)?;
            guard.enhanced = true;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Loop state touched by input
struct Session {
    clock: Clock,
    step: FixedStep,
    pump: InputPump,
    summary: RunSummary,
}

impl Session {
    fn new(step: FixedStep, pump: InputPump) -> Self {
        Self {
            clock: Clock::new(),
            step,
            pump,
            summary: RunSummary::new(),
        }
    }

    /// Apply pause and key controls to `game`. Quit and resize stay with the loop.
    fn dispatch<G: Game>(&mut self, control: Control, game: &mut G) {
        match control {
            Control::TogglePause => {
                let paused = self.clock.toggle_pause();
                self.step.reset();
                info!(tick = self.clock.tick, paused, "pause toggled");
                if paused {
                    for release in self.pump.release_all() {
                        if let Control::Key(event) = release {
                            self.forward(event, game);
                        }
                    }
                }
            }
            // releases still go through so nothing stays held across a pause
            Control::Key(event) if !self.clock.is_paused() || event.is_release() => {
                self.forward(event, game);
            }
            Control::Key(_) | Control::Quit | Control::Resize(..) => {}
        }
    }

    fn forward<G: Game>(&mut self, event: KeyEvent, game: &mut G) {
        let events = game.on_key(event);
        log_events(&events, self.clock.tick);
        self.summary.record(&events);
    }
}

/// Run `game` until the player quits
pub fn run<G: Game>(game: &mut G, options: &RunOptions) -> Result<RunSummary> {
    let step = FixedStep::new(game.tick_interval())?.with_max_catch_up(options.max_catch_up);
    let frame_interval = options.frame_interval();

    let mut guard = TerminalGuard::enter()?;
    let (cols, rows) = terminal::size().map_err(term_err)?;
    info!(
        title = game.title(),
        cols,
        rows,
        enhanced = guard.enhanced,
        "starting"
    );
    if !guard.enhanced {
        debug!("terminal does not report key releases, synthesising them");
    }

    let mut surface = Surface::new(cols, rows);
    let mut session = Session::new(step, InputPump::new(guard.enhanced, options.hold));
    let (width, height) = game.size();
    let mut frame = Frame::new(width, height, Color::BLACK);

    let mut last_update = Instant::now();
    let mut last_render: Option<Instant> = None;

    'session: loop {
        let timeout = if session.clock.is_paused() {
            frame_interval
        } else {
            session.step.until_next().min(frame_interval)
        };

        for control in session.pump.poll(timeout).map_err(term_err)? {
            match control {
                Control::Quit => break 'session,
                Control::Resize(cols, rows) => {
                    debug!(cols, rows, "resized");
                    surface.resize(cols, rows);
                    execute!(guard.out, terminal::Clear(terminal::ClearType::All))
                        .map_err(term_err)?;
                }
                other => session.dispatch(other, game),
            }
        }

        let now = Instant::now();
        let elapsed = now - last_update;
        last_update = now;

        if !session.clock.is_paused() {
            let due = session.step.advance(elapsed);
            if due > 1 {
                debug!(due, "catching up");
            }
            for _ in 0..due {
                session.clock.advance();
                let events = game.update();
                log_events(&events, session.clock.tick);
                session.summary.record(&events);
            }
        }

        let render_due = last_render.map_or(true, |t| now - t >= frame_interval);
        if render_due {
            game.view(&mut frame);
            if session.clock.is_paused() {
                frame.centered_text("Paused - press P", height / 2, TextSize::Large, Color::YELLOW);
            }
            if let Err(e) = surface.present(&frame, &mut guard.out) {
                warn!(error = %e, "render failed");
                return Err(term_err(e));
            }
            last_render = Some(now);
        }
    }

    guard.out.flush().map_err(term_err)?;
    drop(guard);

    let mut summary = session.summary;
    summary.score = game.score();
    summary.best_score = summary.best_score.max(summary.score);
    summary.ticks = session.clock.tick;
    info!(
        score = summary.score,
        best = summary.best_score,
        rounds = summary.rounds,
        "session ended"
    );
    Ok(summary)
}
