use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches the config file for changes and sends a notification on every write.
///
/// # Example
/// ```no_run
/// # use netuse_config::ConfigWatcher;
/// # async fn example() {
/// let (_, mut rx) = ConfigWatcher::spawn("/home/user/.config/netuse/netuse.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
    use tokio::sync::mpsc as async_mpsc;

    let (sync_tx, mut sync_rx) = async_mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    // The config file is optional.  When it doesn't exist yet, watch its
    // directory instead so creating it later still triggers a reload.
    let target = if path.exists() {
        path.clone()
    } else {
        match path.parent() {
            Some(dir) if dir.exists() => dir.to_path_buf(),
            _ => {
                info!("No config file or directory to watch; live reload disabled");
                return;
            }
        }
    };

    if let Err(e) = watcher.watch(&target, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", target.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                let matches_kind = matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_));
                let matches_path =
                    e.paths.is_empty() || e.paths.iter().any(|p| p.ends_with(file_name(&path)));
                if matches_kind && matches_path {
                    if tx.send(()).await.is_err() {
                        break; // receiver dropped
                    }
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

fn file_name(path: &Path) -> &std::ffi::OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}
