//! Desktop window hosting the throughput graph.
//!
//! Owns the Iced application loop and wires together all background tasks:
//! - Wireless counter poll task (rate samples on a fixed interval)
//! - Config file watcher (live reload on change)
//! - Ctrl+Q quit keybinding

use futures::channel::mpsc::Sender;
use iced::{keyboard, window, Element, Size, Subscription, Task};
use netuse_config::{default_path, load as load_config, LayoutConfig, NetuseConfig};
use netuse_core::{Clock, Message, MonotonicClock, RateSample, TimeIndexedData};
use netuse_system::WifiCounters;
use netuse_theme::Theme;
use netuse_view::{GraphState, GraphView};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

/// Icon file expected next to the executable.
const ICON_FILE_NAME: &str = "netuse.png";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the graph window.  Returns when the window is closed or Ctrl+Q is
/// pressed.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_default();
    let size = Size::new(config.window.width, config.window.height);

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(|app: &App| app.title.clone())
        .subscription(App::subscription)
        .window(window::Settings {
            size,
            icon: load_icon(),
            ..Default::default()
        })
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    /// Rolling sample history; the view borrows it read-only every frame.
    data: TimeIndexedData<RateSample>,
    graph: GraphState,
    layout: LayoutConfig,
    theme: Theme,
    title: String,
    clock: MonotonicClock,
}

impl App {
    fn new(config: NetuseConfig) -> (Self, Task<Message>) {
        let app = Self {
            data: TimeIndexedData::new(config.poll.retention_secs),
            graph: GraphState::new(),
            layout: config.layout,
            theme: Theme::from_config(&config.theme),
            title: config.window.title,
            clock: MonotonicClock::new(),
        };

        (app, Task::none())
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RateSample(sample) => {
                let now = self.clock.now();
                self.data.add(now, sample);
                self.graph.invalidate();
                Task::none()
            }
            Message::ConfigReloaded => {
                match load_config(default_path()) {
                    Ok(config) => {
                        info!("Config reloaded");
                        self.theme = Theme::from_config(&config.theme);
                        self.layout = config.layout;
                        self.title = config.window.title;
                        self.graph.invalidate();
                    }
                    Err(e) => warn!("Config reload failed: {e}"),
                }
                Task::none()
            }
            Message::QuitRequested => iced::exit(),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        GraphView::new(&self.data, &self.graph, &self.layout, &self.theme).view()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            Subscription::run(poll_stream),
            Subscription::run(config_stream),
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, modifiers, .. } => {
                    quit_keybind(key, modifiers)
                }
                _ => None,
            }),
        ])
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  Iced uses the function pointer address
// to deduplicate subscriptions across redraws.

/// Polls the wireless byte counters on the configured interval and forwards
/// rate samples.
fn poll_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let config = load_config(default_path()).unwrap_or_default();

        let counters = match WifiCounters::detect() {
            Ok(c) => c,
            Err(e) => {
                // Startup already validated this; losing the interface later
                // leaves the window up with a frozen graph.
                error!("Wireless counters unavailable: {e}");
                loop {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                }
            }
        };
        info!("Polling wireless interface '{}'", counters.interface());

        let mut rx = netuse_system::spawn_monitor(counters, config.poll.interval_ms);

        while let Some(sample) = rx.recv().await {
            let _ = sender.try_send(Message::RateSample(sample));
        }

        // Poll task exited — shouldn't happen; stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = netuse_config::ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quit_keybind(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Character("q") if modifiers.control() => Some(Message::QuitRequested),
        _ => None,
    }
}

fn load_icon() -> Option<window::Icon> {
    let path = icon_path()?;
    match window::icon::from_file(&path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Could not load icon '{}': {e}", path.display());
            None
        }
    }
}

/// The icon ships next to the binary, not in a theme directory.
fn icon_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(ICON_FILE_NAME))
}
