use crate::state::RateSample;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Counter poll task     → `RateSample`
/// - Config watcher task   → `ConfigReloaded`
/// - Keyboard subscription → `QuitRequested`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh throughput sample from the background poll task.
    RateSample(RateSample),
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
    /// User pressed the quit keybinding.
    QuitRequested,
}
