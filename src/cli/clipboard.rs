// src/cli/clipboard.rs
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use zeroize::Zeroizing;

use crate::error::{AppError, Result};

/// Minimal clipboard surface, so restore sequencing can be exercised without a display.
pub trait ClipboardBackend: Send + 'static {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// The system clipboard. A fresh handle is opened per call.
pub struct SystemClipboard;

fn open() -> Result<arboard::Clipboard> {
    arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {e}")))
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        open().ok()?.get_text().ok()
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        open()?
            .set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(format!("Failed to copy to clipboard: {e}")))
    }

    fn clear(&mut self) -> Result<()> {
        open()?
            .clear()
            .map_err(|e| AppError::Clipboard(format!("Failed to clear clipboard: {e}")))
    }
}

struct Pending {
    // What was on the clipboard before the first of a run of copies
    original: Option<Zeroizing<String>>,
    copied: Zeroizing<String>,
    deadline: Instant,
}

struct State<B> {
    backend: B,
    pending: Option<Pending>,
    shutdown: bool,
}

impl<B: ClipboardBackend> State<B> {
    /// Put the original contents back, unless someone else replaced our text meanwhile.
    fn restore(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let current = self.backend.get_text().map(Zeroizing::new);
        if current.as_deref().map(String::as_str) != Some(pending.copied.as_str()) {
            log::debug!("Clipboard changed since the copy, leaving it alone");
            return;
        }

        let restored = match &pending.original {
            Some(original) => self.backend.set_text(original),
            None => self.backend.clear(),
        };
        match restored {
            Ok(()) => log::debug!("Clipboard restored"),
            Err(e) => log::warn!("Could not restore the clipboard: {}", e),
        }
    }
}

struct Shared<B> {
    state: Mutex<State<B>>,
    wake: Condvar,
}

impl<B> Shared<B> {
    fn lock(&self) -> MutexGuard<'_, State<B>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Restores the clipboard from another thread, e.g. a Ctrl+C handler.
pub struct RestoreHandle<B> {
    shared: Arc<Shared<B>>,
}

impl<B: ClipboardBackend> RestoreHandle<B> {
    pub fn restore_now(&self) {
        self.shared.lock().restore();
        self.shared.wake.notify_all();
    }
}

/// Copies passwords and puts the previous clipboard contents back after `clear_after`.
///
/// A copy made while a restore is pending keeps the first original, so a run of
/// copies always ends with the pre-copy contents. Anything still pending is
/// restored when the manager is dropped.
pub struct ClipboardManager<B: ClipboardBackend> {
    shared: Arc<Shared<B>>,
    clear_after: Option<Duration>,
    timer: Option<JoinHandle<()>>,
}

impl ClipboardManager<SystemClipboard> {
    pub fn system(clear_after: Option<Duration>) -> Self {
        Self::new(SystemClipboard, clear_after)
    }
}

impl<B: ClipboardBackend> ClipboardManager<B> {
    pub fn new(backend: B, clear_after: Option<Duration>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    backend,
                    pending: None,
                    shutdown: false,
                }),
                wake: Condvar::new(),
            }),
            clear_after,
            timer: None,
        }
    }

    pub fn clear_after(&self) -> Option<Duration> {
        self.clear_after
    }

    pub fn handle(&self) -> RestoreHandle<B> {
        RestoreHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        {
            let mut state = self.shared.lock();

            let original = match state.pending.take() {
                Some(pending)
                    if state.backend.get_text().as_deref() == Some(pending.copied.as_str()) =>
                {
                    pending.original
                }
                _ => state.backend.get_text().map(Zeroizing::new),
            };

            state.backend.set_text(text)?;
            log::debug!("Copied {} characters to the clipboard", text.chars().count());

            if let Some(after) = self.clear_after {
                state.pending = Some(Pending {
                    original,
                    copied: Zeroizing::new(text.to_owned()),
                    deadline: Instant::now() + after,
                });
            }
        }

        if self.clear_after.is_some() {
            self.ensure_timer();
            self.shared.wake.notify_all();
        }
        Ok(())
    }

    /// Block until any pending restore has happened.
    pub fn wait(&self) {
        let mut state = self.shared.lock();
        while state.pending.is_some() && !state.shutdown {
            state = self
                .shared
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn ensure_timer(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let shared = Arc::clone(&self.shared);
        self.timer = Some(thread::spawn(move || run_timer(&shared)));
    }
}

fn run_timer<B: ClipboardBackend>(shared: &Shared<B>) {
    let mut state = shared.lock();
    while !state.shutdown {
        match state.pending.as_ref().map(|p| p.deadline) {
            None => {
                state = shared.wake.wait(state).unwrap_or_else(PoisonError::into_inner);
            }
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    state.restore();
                    shared.wake.notify_all();
                } else {
                    state = shared
                        .wake
                        .wait_timeout(state, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0;
                }
            }
        }
    }
}

impl<B: ClipboardBackend> Drop for ClipboardManager<B> {
    fn drop(&mut self) {
        {
            let mut state = self.shared.lock();
            state.restore();
            state.shutdown = true;
        }
        self.shared.wake.notify_all();
        if let Some(timer) = self.timer.take() {
            let _ = timer.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        contents: Arc<Mutex<Option<String>>>,
    }

    impl FakeClipboard {
        fn holding(text: &str) -> Self {
            let fake = Self::default();
            *fake.contents.lock().unwrap() = Some(text.to_string());
            fake
        }

        fn current(&self) -> Option<String> {
            self.contents.lock().unwrap().clone()
        }
    }

    impl ClipboardBackend for FakeClipboard {
        fn get_text(&mut self) -> Option<String> {
            self.current()
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            *self.contents.lock().unwrap() = None;
            Ok(())
        }
    }

    const LONG: Option<Duration> = Some(Duration::from_secs(3600));

    #[test]
    fn copy_then_drop_restores_original() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        assert_eq!(fake.current().as_deref(), Some("pw1"));

        drop(manager);
        assert_eq!(fake.current().as_deref(), Some("original"));
    }

    #[test]
    fn overlapping_copies_restore_the_first_original() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        manager.copy("pw2").unwrap();
        assert_eq!(fake.current().as_deref(), Some("pw2"));

        drop(manager);
        assert_eq!(fake.current().as_deref(), Some("original"));
    }

    #[test]
    fn empty_clipboard_is_cleared_again() {
        let fake = FakeClipboard::default();
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        drop(manager);
        assert_eq!(fake.current(), None);
    }

    #[test]
    fn foreign_contents_are_left_alone() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        fake.clone().set_text("user text").unwrap();

        drop(manager);
        assert_eq!(fake.current().as_deref(), Some("user text"));
    }

    #[test]
    fn copy_after_foreign_change_treats_it_as_original() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        fake.clone().set_text("user text").unwrap();
        manager.copy("pw2").unwrap();

        drop(manager);
        assert_eq!(fake.current().as_deref(), Some("user text"));
    }

    #[test]
    fn timer_restores_after_delay() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), Some(Duration::from_millis(20)));

        manager.copy("pw1").unwrap();
        manager.wait();
        assert_eq!(fake.current().as_deref(), Some("original"));
    }

    #[test]
    fn restore_handle_flushes_immediately() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), LONG);

        manager.copy("pw1").unwrap();
        manager.handle().restore_now();
        assert_eq!(fake.current().as_deref(), Some("original"));

        // Nothing pending, so waiting returns at once
        manager.wait();
    }

    #[test]
    fn without_timeout_the_password_stays() {
        let fake = FakeClipboard::holding("original");
        let mut manager = ClipboardManager::new(fake.clone(), None);

        manager.copy("pw1").unwrap();
        manager.wait();
        drop(manager);
        assert_eq!(fake.current().as_deref(), Some("pw1"));
    }
}
