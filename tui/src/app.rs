//! Main Application
//!
//! The App wires the pieces together as a thin display client:
//! - Event loop (keyboard, resize, one-second schedule tick, frame tick)
//! - FeedWorker for non-blocking refreshes
//! - Deck + CardAnimator for display state
//!
//! All state mutation happens on this task; refresh fetches run on
//! spawned tasks and report back over the feed channel, which is
//! drained non-blockingly once per loop pass. A stalled fetch therefore
//! never delays a tick, and whichever response resolves last wins.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use cardwall_core::{
    Deck, DisplayConfig, FeedEvent, FeedSource, FeedWorker, HttpFeed, Schedule, TickAction,
};

use crate::animator::CardAnimator;
use crate::theme::Theme;
use crate::view;

/// Frame pacing for animations (~30 FPS is plenty for a wall display).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Resolved configuration for this run.
    config: DisplayConfig,
    /// Current palette (toggled with `t`).
    theme: Theme,
    /// The ordered card list.
    deck: Deck,
    /// Tick counter and refresh/rotate decisions.
    schedule: Schedule,
    /// Per-card motion state.
    animator: CardAnimator,
    /// Handle for requesting background refreshes.
    worker: FeedWorker,
    /// Refresh outcomes, drained each loop pass.
    feed_rx: mpsc::Receiver<FeedEvent>,
    /// Whether the most recent refresh failed (header marker).
    feed_down: bool,
    /// Last frame time (for animation deltas).
    last_frame: Instant,
}

impl App {
    /// Create an App polling the configured HTTP endpoint.
    pub fn new(config: DisplayConfig) -> Self {
        let source = Arc::new(HttpFeed::new(&config.api_url));
        Self::with_source(config, source)
    }

    /// Create an App over any feed source. Tests use this with
    /// scripted sources; production goes through [`App::new`].
    pub fn with_source(config: DisplayConfig, source: Arc<dyn FeedSource>) -> Self {
        let (worker, feed_rx) =
            FeedWorker::channel(source, config.user_name.clone(), config.raw_markup);
        let schedule = Schedule::new(config.refresh_interval, config.scroll_interval);
        let theme = Theme::from_mode(config.theme);

        Self {
            running: true,
            config,
            theme,
            deck: Deck::new(),
            schedule,
            animator: CardAnimator::new(),
            worker,
            feed_rx,
            feed_down: false,
            last_frame: Instant::now(),
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // The schedule ticks once per second, first fire a full second
        // from now; the initial fetch happens immediately instead.
        let mut ticker = tokio::time::interval_at(
            tokio::time::Instant::now() + Duration::from_secs(1),
            Duration::from_secs(1),
        );
        let mut event_stream = EventStream::new();

        tracing::info!(
            url = %self.config.api_url,
            user = ?self.config.user_name,
            "starting card display"
        );
        self.worker.request_refresh();

        // Render the first frame immediately so the user sees the UI.
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Resize(_, _) => {
                                // Next render picks up the new size.
                            }
                            _ => {}
                        }
                    }
                }

                // One display second
                _ = ticker.tick() => {
                    self.on_tick();
                }

                // Frame tick - keep animations moving
                _ = tokio::time::sleep(FRAME_DURATION) => {}
            }

            self.drain_feed_events();
            self.update();
            self.render(terminal)?;
        }

        Ok(())
    }

    /// Apply one schedule tick.
    fn on_tick(&mut self) {
        match self.schedule.tick() {
            TickAction::Refresh => {
                tracing::debug!("scheduled refresh");
                self.worker.request_refresh();
            }
            TickAction::Rotate => {
                self.deck.rotate();
                self.animator.sync(&self.deck);
            }
            TickAction::Idle => {}
        }
    }

    /// Drain pending refresh outcomes without blocking.
    fn drain_feed_events(&mut self) {
        while let Ok(event) = self.feed_rx.try_recv() {
            self.apply_feed_event(event);
        }
    }

    /// Apply one refresh outcome to the display state.
    pub fn apply_feed_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Replaced { cards } => {
                self.deck.replace(cards);
                self.feed_down = false;
                self.animator.sync(&self.deck);
            }
            FeedEvent::Failed { reason } => {
                // Keep the current deck; just flag the header.
                tracing::warn!(reason = %reason, "refresh failed, keeping current cards");
                self.feed_down = true;
            }
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Toggle theme
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
            }

            // Force a refresh, restarting the countdown
            KeyCode::Char('r') => {
                self.schedule.restart();
                self.worker.request_refresh();
            }

            _ => {}
        }
    }

    /// Advance animations by the frame delta.
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        self.animator.update(delta);
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            view::draw(
                frame.buffer_mut(),
                area,
                &self.theme,
                &self.schedule,
                self.feed_down,
                self.animator.motions(),
            );
        })?;

        Ok(())
    }

    /// The cards currently in the deck, in visual order.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Whether the last refresh failed.
    pub fn feed_down(&self) -> bool {
        self.feed_down
    }

    /// Current palette.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
