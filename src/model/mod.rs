//! Canonical result model.
//!
//! The common schema every source library's fixtures are mapped into:
//! - `Headers`: the request the fixture was recorded with
//! - `Browser`, `Engine`, `Os`, `Device`: what was detected
//! - `Company`: shared manufacturer/brand records
//! - `Version`: structured versions rendered at configurable precision
//!
//! Every field has a defined value; unidentified parts hold explicit
//! sentinels (`None` names, `Unknown` enum variants, the unknown version,
//! `Company::unknown()`).

mod browser;
mod company;
mod device;
mod engine;
mod headers;
mod os;
mod result;
mod version;

pub use browser::{Browser, BrowserType};
pub use company::{Company, UNKNOWN_COMPANY_KEY};
pub use device::{is_generic_name, is_identified_name, Device, DeviceType, PointingMethod};
pub use engine::Engine;
pub use headers::{Headers, USER_AGENT_HEADER};
pub use os::Os;
pub use result::CanonicalResult;
pub use version::{Version, VersionFormat};
