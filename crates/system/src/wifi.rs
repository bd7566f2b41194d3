use netuse_core::{NetuseError, Result};
use std::path::{Path, PathBuf};

/// Kernel statistics pseudo-file with per-interface byte/packet counters.
const PROC_NET_DEV: &str = "/proc/net/dev";

/// Wireless interfaces are matched by this name prefix (`wlan0`, `wlp3s0`, …).
const WIRELESS_PREFIX: &str = "wl";

/// Cumulative interface byte counters since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCounts {
    /// Total bytes received.
    pub rx: u64,
    /// Total bytes transmitted.
    pub tx: u64,
}

/// Reads RX/TX byte counters for the first wireless interface.
///
/// The interface is picked once at detection time; [`WifiCounters::read`]
/// then re-reads the stats file and extracts that interface's line.
#[derive(Debug, Clone)]
pub struct WifiCounters {
    path: PathBuf,
    interface: String,
}

impl WifiCounters {
    /// Find the first wireless interface in `/proc/net/dev`.
    ///
    /// Fails with a clear diagnostic when the file is unreadable or no
    /// interface name starts with [`WIRELESS_PREFIX`].
    pub fn detect() -> Result<Self> {
        let path = Path::new(PROC_NET_DEV);
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NetuseError::Counter(format!("cannot read '{}': {e}", path.display()))
        })?;

        let interface = find_interface(&contents)
            .ok_or_else(|| {
                NetuseError::NoWirelessInterface(
                    WIRELESS_PREFIX.to_string(),
                    path.display().to_string(),
                )
            })?
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            interface,
        })
    }

    /// Name of the interface being read, e.g. `"wlan0"`.
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Read the current cumulative byte counters.
    pub fn read(&self) -> Result<ByteCounts> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            NetuseError::Counter(format!("cannot read '{}': {e}", self.path.display()))
        })?;
        parse_counts(&contents, &self.interface)
    }
}

/// First interface name with the wireless prefix, if any.
fn find_interface(contents: &str) -> Option<&str> {
    contents
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with(WIRELESS_PREFIX))
        .filter_map(|line| line.split(':').next())
        .next()
}

/// Extract the cumulative RX/TX byte counts for `interface`.
///
/// Stats lines look like `wlan0: 1234 10 0 0 … 5678 7 0 …`; after splitting
/// on whitespace, field 1 is RX bytes and field 9 is TX bytes.
fn parse_counts(contents: &str, interface: &str) -> Result<ByteCounts> {
    let line = contents
        .lines()
        .map(str::trim_start)
        .find(|line| {
            line.split(':')
                .next()
                .is_some_and(|name| name == interface)
        })
        .ok_or_else(|| {
            NetuseError::Counter(format!("interface '{interface}' disappeared from stats"))
        })?;

    let fields: Vec<&str> = line.split_whitespace().collect();
    let field = |i: usize| -> Result<u64> {
        fields
            .get(i)
            .and_then(|f| f.parse::<u64>().ok())
            .ok_or_else(|| {
                NetuseError::Counter(format!("malformed stats line for '{interface}': {line}"))
            })
    };

    Ok(ByteCounts {
        rx: field(1)?,
        tx: field(9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  104013    1024    0    0    0     0          0         0   104013    1024    0    0    0     0       0          0
  eth0: 9876543   12345    0    0    0     0          0         0  1234567    8765    0    0    0     0       0          0
 wlan0: 3000000    2048    0    0    0     0          0         0  1500000    1024    0    0    0     0       0          0
 wlan1:  555555     512    0    0    0     0          0         0   222222     256    0    0    0     0       0          0
";

    #[test]
    fn picks_first_wireless_interface() {
        assert_eq!(find_interface(SAMPLE), Some("wlan0"));
    }

    #[test]
    fn no_wireless_interface() {
        let wired_only = "    lo: 1 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0\n  eth0: 2 0 0 0 0 0 0 0 2 0 0 0 0 0 0 0\n";
        assert_eq!(find_interface(wired_only), None);
    }

    #[test]
    fn extracts_rx_and_tx_fields() {
        let counts = parse_counts(SAMPLE, "wlan0").unwrap();
        assert_eq!(counts, ByteCounts { rx: 3_000_000, tx: 1_500_000 });
    }

    #[test]
    fn second_interface_readable_by_name() {
        let counts = parse_counts(SAMPLE, "wlan1").unwrap();
        assert_eq!(counts, ByteCounts { rx: 555_555, tx: 222_222 });
    }

    #[test]
    fn malformed_line_is_an_error() {
        let broken = " wlan0: only three fields\n";
        assert!(parse_counts(broken, "wlan0").is_err());
    }

    #[test]
    fn vanished_interface_is_an_error() {
        assert!(parse_counts(SAMPLE, "wlan9").is_err());
    }
}
