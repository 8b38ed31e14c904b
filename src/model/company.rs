//! Manufacturer / brand records.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

/// Key of the "no manufacturer" sentinel.
pub const UNKNOWN_COMPANY_KEY: &str = "unknown";

static UNKNOWN_COMPANY: LazyLock<Arc<Company>> = LazyLock::new(|| {
    Arc::new(Company {
        key: UNKNOWN_COMPANY_KEY.to_string(),
        name: None,
        brand_name: None,
    })
});

/// A manufacturer or brand, as registered in the company table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub key: String,
    pub name: Option<String>,
    #[serde(rename = "brandname")]
    pub brand_name: Option<String>,
}

impl Company {
    /// The shared "no manufacturer" sentinel.
    pub fn unknown() -> Arc<Company> {
        Arc::clone(&UNKNOWN_COMPANY)
    }

    pub fn is_unknown(&self) -> bool {
        self.key == UNKNOWN_COMPANY_KEY
    }

    /// The company name, or `""` for the sentinel.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Serializes a company as its key and resolves the key through the
/// process-wide company table when reading fixtures back.
pub(crate) mod company_ref {
    use std::sync::Arc;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Company;
    use crate::lookup::{companies, CompanyLoader};

    pub fn serialize<S>(company: &Arc<Company>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&company.key)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Arc<Company>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(match key {
            Some(key) => companies().load(&key).unwrap_or_else(|_| Company::unknown()),
            None => Company::unknown(),
        })
    }
}
