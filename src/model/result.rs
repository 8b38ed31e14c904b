//! The canonical result every source is mapped into.

use serde::{Deserialize, Serialize};

use super::{Browser, Device, Engine, Headers, Os};

/// One detection answer: the request headers plus what was detected.
///
/// Owns all of its parts; companies are shared read-only records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalResult {
    pub headers: Headers,
    #[serde(default)]
    pub browser: Browser,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub os: Os,
    #[serde(default)]
    pub device: Device,
}

impl CanonicalResult {
    pub fn new(headers: Headers, browser: Browser, engine: Engine, os: Os, device: Device) -> Self {
        CanonicalResult {
            headers,
            browser,
            engine,
            os,
            device,
        }
    }

    /// A result for `headers` where nothing was identified.
    pub fn unknown(headers: Headers) -> Self {
        Self::new(
            headers,
            Browser::unknown(),
            Engine::unknown(),
            Os::unknown(),
            Device::unknown(),
        )
    }

    pub fn header_string(&self) -> String {
        self.headers.header_string()
    }

    /// Same result with the device replaced.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}
