//! Terminal input translation
//!
//! Terminals that support the keyboard enhancement protocol report key
//! releases directly. Everywhere else only presses arrive (auto-repeat
//! included), so held arrow keys are tracked here and released after a
//! period of silence.

use arcade_core::{Key, KeyAction, KeyEvent};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

/// What the runner should do with an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
    TogglePause,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Timeouts used to synthesise releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldTimeouts {
    /// Silence after the first press, covering the terminal's repeat delay
    pub initial: Duration,
    /// Silence between auto-repeats
    pub repeat: Duration,
}

impl Default for HoldTimeouts {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(550),
            repeat: Duration::from_millis(120),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    last_seen: Instant,
    repeating: bool,
}

/// Turns crossterm events into [`Control`]s
#[derive(Debug)]
pub struct InputPump {
    enhanced: bool,
    timeouts: HoldTimeouts,
    held: HashMap<Key, Held>,
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

fn map_action(kind: KeyEventKind) -> KeyAction {
    match kind {
        KeyEventKind::Press => KeyAction::Press,
        KeyEventKind::Repeat => KeyAction::Repeat,
        KeyEventKind::Release => KeyAction::Release,
    }
}

fn is_holdable(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right | Key::Up | Key::Down)
}

impl InputPump {
    /// `enhanced` tells whether the terminal reports key releases
    pub fn new(enhanced: bool, timeouts: HoldTimeouts) -> Self {
        Self {
            enhanced,
            timeouts,
            held: HashMap::new(),
        }
    }

    /// Translate one terminal event observed at `now`
    pub fn translate(&mut self, event: &Event, now: Instant) -> Vec<Control> {
        match event {
            Event::Resize(cols, rows) => vec![Control::Resize(*cols, *rows)],
            Event::Key(key_event) => {
                let action = map_action(key_event.kind);
                let key = map_key(key_event.code);

                if action != KeyAction::Release {
                    let ctrl_c = key_event.modifiers.contains(KeyModifiers::CONTROL)
                        && key_event.code == KeyCode::Char('c');
                    if ctrl_c || key == Key::Escape || key.is_letter('q') {
                        return vec![Control::Quit];
                    }
                    if key.is_letter('p') && action == KeyAction::Press {
                        return vec![Control::TogglePause];
                    }
                }

                if self.enhanced || !is_holdable(key) {
                    return vec![Control::Key(KeyEvent::new(key, action))];
                }

                // no release events: every report is a press, repeats included
                match self.held.get_mut(&key) {
                    Some(held) => {
                        held.last_seen = now;
                        held.repeating = true;
                        vec![Control::Key(KeyEvent::repeat(key))]
                    }
                    None => {
                        self.held.insert(
                            key,
                            Held {
                                last_seen: now,
                                repeating: false,
                            },
                        );
                        vec![Control::Key(KeyEvent::press(key))]
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    /// Synthetic releases for held keys that went quiet
    pub fn expire(&mut self, now: Instant) -> Vec<Control> {
        if self.enhanced {
            return Vec::new();
        }
        let timeouts = self.timeouts;
        let mut released: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, held)| {
                let limit = if held.repeating {
                    timeouts.repeat
                } else {
                    timeouts.initial
                };
                now.saturating_duration_since(held.last_seen) >= limit
            })
            .map(|(key, _)| *key)
            .collect();
        released.sort();

        for key in &released {
            self.held.remove(key);
        }
        released
            .into_iter()
            .map(|key| Control::Key(KeyEvent::release(key)))
            .collect()
    }

    /// Release everything, e.g. when pausing
    pub fn release_all(&mut self) -> Vec<Control> {
        let mut keys: Vec<Key> = self.held.drain().map(|(key, _)| key).collect();
        keys.sort();
        keys.into_iter()
            .map(|key| Control::Key(KeyEvent::release(key)))
            .collect()
    }

    /// Wait up to `timeout` for input and drain everything available
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Control>> {
        let mut controls = Vec::new();
        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                controls.extend(self.translate(&ev, Instant::now()));
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        controls.extend(self.expire(Instant::now()));
        Ok(controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as CtKeyEvent, KeyEventState};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(CtKeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_and_pause() {
        let mut pump = InputPump::new(true, HoldTimeouts::default());
        let now = Instant::now();
        assert_eq!(pump.translate(&press(KeyCode::Esc), now), vec![Control::Quit]);
        assert_eq!(pump.translate(&press(KeyCode::Char('Q')), now), vec![Control::Quit]);
        assert_eq!(
            pump.translate(&press(KeyCode::Char('p')), now),
            vec![Control::TogglePause]
        );

        let ctrl_c = Event::Key(CtKeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(pump.translate(&ctrl_c, now), vec![Control::Quit]);
    }

    #[test]
    fn test_enhanced_passes_releases_through() {
        let mut pump = InputPump::new(true, HoldTimeouts::default());
        let now = Instant::now();
        assert_eq!(
            pump.translate(&press(KeyCode::Left), now),
            vec![Control::Key(KeyEvent::press(Key::Left))]
        );
        assert_eq!(
            pump.translate(&key(KeyCode::Left, KeyEventKind::Release), now),
            vec![Control::Key(KeyEvent::release(Key::Left))]
        );
        assert!(pump.expire(now + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_space_and_letters() {
        let mut pump = InputPump::new(false, HoldTimeouts::default());
        let now = Instant::now();
        assert_eq!(
            pump.translate(&press(KeyCode::Char(' ')), now),
            vec![Control::Key(KeyEvent::press(Key::Space))]
        );
        assert_eq!(
            pump.translate(&press(KeyCode::Char('r')), now),
            vec![Control::Key(KeyEvent::press(Key::Char('r')))]
        );
        // letters are never held
        assert!(pump.expire(now + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_synthesised_hold_and_release() {
        let timeouts = HoldTimeouts {
            initial: Duration::from_millis(500),
            repeat: Duration::from_millis(100),
        };
        let mut pump = InputPump::new(false, timeouts);
        let t0 = Instant::now();

        assert_eq!(
            pump.translate(&press(KeyCode::Right), t0),
            vec![Control::Key(KeyEvent::press(Key::Right))]
        );
        // waiting out the terminal's repeat delay keeps the key down
        assert!(pump.expire(t0 + Duration::from_millis(400)).is_empty());

        let t1 = t0 + Duration::from_millis(450);
        assert_eq!(
            pump.translate(&press(KeyCode::Right), t1),
            vec![Control::Key(KeyEvent::repeat(Key::Right))]
        );
        assert!(pump.expire(t1 + Duration::from_millis(50)).is_empty());
        assert_eq!(
            pump.expire(t1 + Duration::from_millis(100)),
            vec![Control::Key(KeyEvent::release(Key::Right))]
        );
        assert!(pump.expire(t1 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut pump = InputPump::new(false, HoldTimeouts::default());
        let now = Instant::now();
        pump.translate(&press(KeyCode::Left), now);
        pump.translate(&press(KeyCode::Up), now);
        let released = pump.release_all();
        assert_eq!(released.len(), 2);
        assert!(pump.expire(now + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_resize() {
        let mut pump = InputPump::new(false, HoldTimeouts::default());
        assert_eq!(
            pump.translate(&Event::Resize(120, 40), Instant::now()),
            vec![Control::Resize(120, 40)]
        );
    }
}
