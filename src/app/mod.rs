pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard;
use crate::config::Config;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use shades::Rgb;
use state::{AppState, Toast};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, source: Rgb) -> Self {
        let state = AppState::new(source, cfg.tone);
        Self { cfg, state }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());
        spawn_ticker(tx.clone(), Duration::from_millis(self.cfg.ui.tick_millis.max(10)));
        drop(tx);

        tui::draw(terminal, &self.state)?;

        while let Some(ev) = rx.recv().await {
            let action = match ev {
                Event::Input(input_ev) => input::map_input_to_action(&self.state, input_ev),
                Event::Tick(now) => {
                    // Nothing to expire means nothing to redraw.
                    if self.state.toast.is_none() {
                        continue;
                    }
                    Some(Action::Tick(now))
                }
            };

            if let Some(action) = action {
                self.handle_action(action, terminal);
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.state)?;
        }

        tracing::info!(source = %self.state.source, "exiting");
        Ok(())
    }

    fn handle_action(&mut self, action: Action, terminal: &mut TuiTerminal) {
        match action {
            Action::CopySelected => {
                let Some((shade, color)) = self.state.selected_swatch() else {
                    return;
                };
                let ttl = Duration::from_millis(self.cfg.ui.toast_millis);
                let toast = match clipboard::copy(
                    terminal.backend_mut(),
                    &color.to_string(),
                    self.cfg.clipboard.osc52,
                ) {
                    Ok(()) => {
                        tracing::debug!(shade, %color, "swatch copied");
                        Toast::success("Color copied to clipboard", ttl)
                    }
                    Err(e) => {
                        tracing::warn!(error = %format!("{e:#}"), "copy failed");
                        // Errors stay up long enough to read.
                        Toast::error(format!("Copy failed: {e:#}"), ttl.max(Duration::from_secs(3)))
                    }
                };
                self.reduce(Action::ShowToast(toast));
            }
            other => self.reduce(other),
        }
    }

    fn reduce(&mut self, action: Action) {
        self.state = self.state.clone().update(&action);
    }
}

fn spawn_ticker(tx: mpsc::Sender<Event>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick(Instant::now())).await.is_err() {
                break;
            }
        }
    });
}
