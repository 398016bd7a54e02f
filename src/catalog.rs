//! Device catalog loaded from the reference CSV.

use serde::Deserialize;
use std::path::Path;

use crate::domain::models::{DeviceRecord, OsSupport, SearchCriterion};
use crate::error::{AppError, Result};

pub const CATALOG_FILE: &str = "Privacydevicelist.csv";

/// The affirmative marker used by the catalog's support columns.
const SUPPORTED: &str = "Y";

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "GrapheneOS")]
    graphene: String,
    #[serde(rename = "CalyxOS")]
    calyx: String,
    #[serde(rename = "eOS")]
    eos: String,
    #[serde(rename = "LineageOS")]
    lineage: String,
}

impl From<CatalogRow> for DeviceRecord {
    fn from(row: CatalogRow) -> Self {
        DeviceRecord {
            make: row.make,
            model: row.model,
            os_support: OsSupport {
                graphene: row.graphene == SUPPORTED,
                calyx: row.calyx == SUPPORTED,
                eos: row.eos == SUPPORTED,
                lineage: row.lineage == SUPPORTED,
            },
        }
    }
}

/// The full reference catalog, in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<DeviceRecord>,
}

impl Catalog {
    /// Load the catalog from `path`. A missing file is fatal with no
    /// partial output; so is a malformed row.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::CatalogNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut devices = Vec::new();
        for row in reader.deserialize::<CatalogRow>() {
            devices.push(row?.into());
        }
        log::info!("[CATALOG] Loaded {} devices from {}", devices.len(), path.display());
        Ok(Self { devices })
    }

    pub fn from_devices(devices: Vec<DeviceRecord>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Select the candidate devices for one run, preserving catalog order.
    pub fn select_candidates(&self, criterion: &SearchCriterion) -> Vec<DeviceRecord> {
        self.devices
            .iter()
            .filter(|device| match criterion {
                SearchCriterion::Os(os) => device.os_support.supports(*os),
                SearchCriterion::Brand(brand) => contains_ignore_case(&device.make, brand),
                SearchCriterion::Model(model) => contains_ignore_case(&device.model, model),
            })
            .cloned()
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
