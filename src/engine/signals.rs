//! Signal set definition and host signal reader
//!
//! The signal set is a fixed, ordered sequence of observable client
//! characteristics. Order is significant: two runs producing the same values
//! in the same order must produce the same fingerprint.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{Local, Offset};
use std::path::{Path, PathBuf};

use crate::config::Config;
use super::traits::SignalReader;

/// Separator between joined signals; never appears inside a signal value
pub const SIGNAL_SEPARATOR: &str = "|||";

/// Sentinel for an unavailable canvas rendering snapshot
pub const CANVAS_SENTINEL: &str = "canvas_error";

/// Sentinel for unavailable WebGL vendor/renderer values
pub const WEBGL_SENTINEL: &str = "webgl_error";

/// Sentinel for unknown screen dimensions
pub const SCREEN_SENTINEL: &str = "0x0";

/// One ordered set of client signals, read once at generation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSet {
    /// User agent string advertised by the client
    pub user_agent: String,
    /// Language tag, empty when the host exposes none
    pub language: String,
    /// Screen dimensions as "WIDTHxHEIGHT"
    pub screen: String,
    /// Color depth in bits, absent when unknown
    pub color_depth: Option<u32>,
    /// Timezone offset in minutes, UTC minus local
    pub timezone_offset_minutes: i32,
    /// Platform string (OS and architecture)
    pub platform: String,
    /// Whether durable client-side storage is usable
    pub storage_enabled: bool,
    /// Logical CPU count, absent when it cannot be read
    pub hardware_concurrency: Option<usize>,
    /// Device memory estimate in whole gigabytes, absent when unsupported
    pub device_memory_gb: Option<u64>,
    /// Canvas rendering snapshot as a base64 data URL, or its sentinel
    pub canvas_snapshot: String,
    /// WebGL vendor, or its sentinel
    pub webgl_vendor: String,
    /// WebGL renderer, or its sentinel
    pub webgl_renderer: String,
}

impl SignalSet {
    /// Join all signals into the fingerprint string.
    ///
    /// Absent optional values join as the empty string, matching the sentinel
    /// rule for signals the host never exposes.
    pub fn join(&self) -> String {
        let parts = [
            self.user_agent.clone(),
            self.language.clone(),
            self.screen.clone(),
            self.color_depth.map(|d| d.to_string()).unwrap_or_default(),
            self.timezone_offset_minutes.to_string(),
            self.platform.clone(),
            self.storage_enabled.to_string(),
            self.hardware_concurrency
                .map(|n| n.to_string())
                .unwrap_or_default(),
            self.device_memory_gb
                .map(|m| m.to_string())
                .unwrap_or_default(),
            self.canvas_snapshot.clone(),
            self.webgl_vendor.clone(),
            self.webgl_renderer.clone(),
        ];

        parts.join(SIGNAL_SEPARATOR)
    }
}

/// Signal reader backed by the host environment
///
/// Signals a headless host cannot observe directly (screen, color depth,
/// canvas, WebGL) come from configuration when declared there, and fall back
/// to their sentinels otherwise. Every read is best-effort.
pub struct HostSignalReader {
    user_agent: Option<String>,
    screen: Option<String>,
    color_depth: Option<u32>,
    canvas_snapshot_path: Option<PathBuf>,
    webgl_vendor: Option<String>,
    webgl_renderer: Option<String>,
    state_path: PathBuf,
}

impl HostSignalReader {
    /// Create a reader from the agent configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            screen: config.screen.clone(),
            color_depth: config.color_depth,
            canvas_snapshot_path: config.canvas_snapshot_path.clone().map(PathBuf::from),
            webgl_vendor: config.webgl_vendor.clone(),
            webgl_renderer: config.webgl_renderer.clone(),
            state_path: PathBuf::from(&config.state_path),
        }
    }

    fn default_user_agent() -> String {
        format!(
            "fingermark/{} ({}; {})",
            crate::VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    fn language() -> String {
        std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default()
    }

    /// Timezone offset with the UTC-minus-local sign convention
    fn timezone_offset_minutes() -> i32 {
        -(Local::now().offset().fix().local_minus_utc() / 60)
    }

    /// Whether the state file's directory is usable for durable storage
    fn storage_enabled(&self) -> bool {
        let dir = match self.state_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        match std::fs::metadata(dir) {
            Ok(meta) => !meta.permissions().readonly(),
            Err(_) => std::fs::create_dir_all(dir).is_ok(),
        }
    }

    fn hardware_concurrency() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }

    /// Total memory in whole gigabytes, read from /proc/meminfo on Linux
    fn device_memory_gb() -> Option<u64> {
        #[cfg(target_os = "linux")]
        {
            let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
            let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
            let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
            Some(kb / (1024 * 1024))
        }

        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }

    /// Canvas snapshot as a data URL, or the sentinel when unreadable
    fn canvas_snapshot(&self) -> String {
        let Some(path) = self.canvas_snapshot_path.as_deref() else {
            return CANVAS_SENTINEL.to_string();
        };

        match std::fs::read(path) {
            Ok(bytes) => format!("data:image/png;base64,{}", BASE64.encode(bytes)),
            Err(e) => {
                tracing::debug!("canvas snapshot unreadable at {}: {}", path.display(), e);
                CANVAS_SENTINEL.to_string()
            }
        }
    }
}

impl SignalReader for HostSignalReader {
    fn read(&self) -> SignalSet {
        SignalSet {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(Self::default_user_agent),
            language: Self::language(),
            screen: self
                .screen
                .clone()
                .unwrap_or_else(|| SCREEN_SENTINEL.to_string()),
            color_depth: self.color_depth,
            timezone_offset_minutes: Self::timezone_offset_minutes(),
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            storage_enabled: self.storage_enabled(),
            hardware_concurrency: Self::hardware_concurrency(),
            device_memory_gb: Self::device_memory_gb(),
            canvas_snapshot: self.canvas_snapshot(),
            webgl_vendor: self
                .webgl_vendor
                .clone()
                .unwrap_or_else(|| WEBGL_SENTINEL.to_string()),
            webgl_renderer: self
                .webgl_renderer
                .clone()
                .unwrap_or_else(|| WEBGL_SENTINEL.to_string()),
        }
    }
}
