//! Host session: the engine plus persistence and timed step execution.

use anyhow::{Context, Result};
use navitoir_shared::{Locale, Navitoir, Response, ScheduledStep, SettingsStore};
use std::time::Instant;
use tracing::{info, warn};

/// One handled utterance
#[derive(Debug, Clone)]
pub struct Turn {
    pub response: Response,
    /// Settings were written to the store
    pub persisted: bool,
}

pub struct Session<S: SettingsStore> {
    engine: Navitoir,
    store: S,
    locale: Locale,
}

impl<S: SettingsStore> Session<S> {
    /// Hydrate the engine from the store and start a session
    pub fn start(mut engine: Navitoir, store: S, locale: Locale) -> Result<Self> {
        match store.load().context("Failed to load saved settings")? {
            Some(saved) => {
                info!("Restoring settings saved at {}", saved.updated_at);
                engine.hydrate(&saved);
            }
            None => info!("No saved settings, starting fresh"),
        }
        Ok(Self {
            engine,
            store,
            locale,
        })
    }

    pub fn engine(&self) -> &Navitoir {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Process one utterance and persist if accessibility or theme changed
    pub fn handle(&mut self, text: &str, now: Instant) -> Result<Turn> {
        let response = self.engine.submit(text, self.locale, now)?;
        let persisted = response.state_delta.needs_persist();
        if persisted {
            self.store
                .save(&self.engine.snapshot())
                .context("Failed to save settings")?;
        }
        Ok(Turn {
            response,
            persisted,
        })
    }

    /// Run every pending deferred step in order. With `sleep` the real
    /// delays are honored; otherwise each step is released at its due time
    /// without waiting.
    pub fn run_pending<F>(&mut self, sleep: bool, mut on_step: F)
    where
        F: FnMut(&ScheduledStep),
    {
        while let Some(due) = self.engine.next_due() {
            let now = if sleep {
                let now = Instant::now();
                if due > now {
                    std::thread::sleep(due - now);
                }
                Instant::now()
            } else {
                due
            };
            let released = self.engine.poll(now);
            if released.is_empty() {
                warn!("Scheduler reported a due step but released nothing");
                break;
            }
            for step in &released {
                on_step(step);
            }
        }
    }
}
