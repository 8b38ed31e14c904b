//! Field mapping from library result schemas to the canonical result.
//!
//! One mapper per library translates its vocabulary; all of them share the
//! normalization tables and company resolution in [`InputMapper`]. Every
//! `map_*` method is total: absent or garbage fields map to the unknown
//! value of the field.

mod browscap;
mod input;
mod mobile_detect;
mod piwik;
mod uap_core;
mod which_browser;
mod woothee;
mod yzalis;

pub use browscap::BrowscapMapper;
pub use input::{is_sentinel, InputMapper};
pub use mobile_detect::MobileDetectMapper;
pub use piwik::PiwikMapper;
pub use uap_core::UapCoreMapper;
pub use which_browser::WhichBrowserMapper;
pub use woothee::WootheeMapper;
pub use yzalis::YzalisMapper;

use crate::model::{Browser, CanonicalResult, Device, Engine, Headers, Os};
use crate::source::RawRecord;

/// Maps one library's raw record into the canonical parts.
pub trait FieldMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser;
    fn map_engine(&self, raw: &RawRecord) -> Engine;
    fn map_os(&self, raw: &RawRecord) -> Os;
    fn map_device(&self, raw: &RawRecord) -> Device;

    /// Assembles the full result for the fixture recorded with `header`.
    fn map(&self, raw: &RawRecord, header: &str) -> CanonicalResult {
        CanonicalResult::new(
            Headers::from_header_string(header),
            self.map_browser(raw),
            self.map_engine(raw),
            self.map_os(raw),
            self.map_device(raw),
        )
    }
}

/// First present, non-empty value among `keys`, or `""`.
pub(crate) fn first_value<'r>(raw: &'r RawRecord, keys: &[&str]) -> &'r str {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or("")
}

/// Joins the present version components (`major`, `minor`, `patch`, ...)
/// with dots, stopping at the first missing one.
pub(crate) fn joined_version(raw: &RawRecord, keys: &[&str]) -> String {
    keys.iter()
        .map_while(|key| raw.get(key).filter(|v| !v.trim().is_empty()))
        .collect::<Vec<_>>()
        .join(".")
}
