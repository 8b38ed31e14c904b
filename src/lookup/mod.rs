//! Read-only lookup services for companies and devices.
//!
//! Both tables ship as data files embedded in the binary and can be
//! replaced by a file at startup. Lookups return `LookupError::NotFound` on a
//! miss; callers substitute the unknown sentinel.

mod companies;
mod devices;

pub use companies::{companies, init_companies, CompanyLoader, CompanyTable};
pub use devices::{DeviceLoader, DeviceTable};
