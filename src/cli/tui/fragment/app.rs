use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal, TerminalOptions, Viewport,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::events::AppEvent;
use super::resolver::PrResolver;
use super::state::{Outcome, Step, Wizard};
use super::view;
use crate::config::Settings;
use crate::Result;

/// Lines reserved below the prompt for the wizard
const VIEWPORT_HEIGHT: u16 = 18;

/// How often the input thread checks whether the app is gone
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the terminal and the event loop
pub struct App {
    /// Wizard state, the only thing events mutate
    wizard: Wizard,
    /// Lookup started once at startup
    resolver: PrResolver,
    /// Set when the wizard reports it is done
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            wizard: Wizard::new(settings.changelog_dir.clone()),
            resolver: PrResolver::from_settings(&settings),
            should_quit: false,
        }
    }

    /// Run the wizard to completion and report how it ended
    pub async fn run(mut self) -> Result<Outcome> {
        // Inline viewport so the final frame stays in the scrollback
        let mut terminal = ratatui::try_init_with_options(TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT),
        })?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        spawn_input_reader(event_tx.clone());
        self.spawn_resolver(event_tx);

        let result = self.main_loop(&mut terminal, &mut event_rx).await;
        let parked = self.park_cursor(&mut terminal);

        ratatui::restore();
        result?;
        parked?;
        println!();
        Ok(self.wizard.finish())
    }

    /// Put the cursor on the last line the wizard drew so the shell prompt
    /// lands right below it.
    fn park_cursor(&self, terminal: &mut DefaultTerminal) -> Result<()> {
        let area = terminal.get_frame().area();
        let used = u16::try_from(view::view(&self.wizard, area).height())
            .unwrap_or(u16::MAX)
            .min(area.height);
        terminal.set_cursor_position((0, area.y + used.saturating_sub(1)))?;
        terminal.show_cursor()?;
        Ok(())
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| view::render(frame, &self.wizard))?;

            if self.should_quit {
                break;
            }

            match event_rx.recv().await {
                Some(event) => {
                    if self.wizard.handle_event(event) == Step::Quit {
                        self.should_quit = true;
                    }
                }
                None => break,
            }
        }

        Ok(())
    }

    /// Fire-and-forget: if the wizard quits first the task is dropped when
    /// `main` returns and the runtime shuts down, which kills the child.
    fn spawn_resolver(&self, event_tx: UnboundedSender<AppEvent>) {
        let resolver = self.resolver.clone();
        tokio::spawn(async move {
            let event = AppEvent::from(resolver.resolve().await);
            let _ = event_tx.send(event);
        });
    }
}

fn spawn_input_reader(event_tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to poll terminal input");
                    break;
                }
            }

            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => event_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read terminal input");
                    break;
                }
            };

            if sent.is_err() {
                break;
            }
        }
    });
}
