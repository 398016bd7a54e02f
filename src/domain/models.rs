//! Domain entities - behavior lives WITH data

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

// ====== Enums ======

/// The custom operating systems the catalog tracks support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum OsName {
    GrapheneOs,
    CalyxOs,
    EOs,
    LineageOs,
}

impl OsName {
    pub const ALL: [OsName; 4] = [
        OsName::GrapheneOs,
        OsName::CalyxOs,
        OsName::EOs,
        OsName::LineageOs,
    ];

    /// The catalog column name for this OS.
    pub fn as_str(&self) -> &'static str {
        match self {
            OsName::GrapheneOs => "GrapheneOS",
            OsName::CalyxOs => "CalyxOS",
            OsName::EOs => "eOS",
            OsName::LineageOs => "LineageOS",
        }
    }
}

impl FromStr for OsName {
    type Err = AppError;

    /// Accepts the four catalog column names, ignoring case.
    /// Anything else is a user-input error, not a zero-match search.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OsName::ALL
            .into_iter()
            .find(|os| os.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidOsName(s.trim().to_string()))
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the user narrows the catalog down to candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    Os(OsName),
    Brand(String),
    Model(String),
}

// ====== Entities ======

/// Per-device support flags, one per `OsName`. Copied into every
/// result row so rows stay self-contained after the catalog is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct OsSupport {
    pub graphene: bool,
    pub calyx: bool,
    pub eos: bool,
    pub lineage: bool,
}

impl OsSupport {
    pub fn supports(&self, os: OsName) -> bool {
        match os {
            OsName::GrapheneOs => self.graphene,
            OsName::CalyxOs => self.calyx,
            OsName::EOs => self.eos,
            OsName::LineageOs => self.lineage,
        }
    }

    fn flag(supported: bool) -> char {
        if supported {
            'Y'
        } else {
            'N'
        }
    }
}

impl fmt::Display for OsSupport {
    /// Renders in catalog column order, e.g.
    /// `GrapheneOS: Y, CalyxOS: N, eOS: Y, LineageOS: Y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for os in OsName::ALL {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", os, Self::flag(self.supports(os)))?;
            first = false;
        }
        Ok(())
    }
}

/// One row of the reference catalog.
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    pub make: String,
    pub model: String,
    pub os_support: OsSupport,
}

impl DeviceRecord {
    /// The marketplace search query for this device.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A single marketplace search-result entry that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub link: String,
}

/// The final joined unit: device + listing + OS-support snapshot.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub device: String,
    pub listing: Listing,
    pub os_support: OsSupport,
}
