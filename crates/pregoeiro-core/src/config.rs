//! Tender constants and edital citations.
//!
//! Everything the rules and templates quote from the edital lives here, so a
//! revised edital only touches this struct (or a JSON override file), never
//! the evaluation or template logic. Defaults are PE 90019/2025 (Finep).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::CockpitError;

pub const DEFAULT_TENDER_ID: &str = "PE 90019/2025";
pub const DEFAULT_AGENCY: &str = "Finep";
pub const DEFAULT_OBJECT: &str = "Consultoria IFRS 9 / CMN 4.966";

/// Estimated contract value in BRL.
pub const DEFAULT_ESTIMATED_VALUE: f64 = 3_295_260.58;

/// Share of the estimated value a bidder's net worth must reach when the
/// liquidity/solvency ratios do not all clear 1.0.
pub const DEFAULT_NET_WORTH_RATIO: f64 = 0.10;

/// Minimum total assets of the bank issuing the technical attestation (BRL).
pub const DEFAULT_MIN_BANK_ASSETS: f64 = 14_000_000_000.00;

/// Edital items and figures quoted verbatim by the announcement templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citations {
    pub suspension_item: String,
    pub spreadsheet_item: String,
    pub qualification_item: String,
    pub asset_threshold_item: String,
    pub asset_threshold_label: String,
    pub appeal_item: String,
    pub appeal_denial_item: String,
    pub unviable_price_item: String,
    pub unviable_price_percent: u32,
}

impl Default for Citations {
    fn default() -> Self {
        Self {
            suspension_item: "14.2".into(),
            spreadsheet_item: "10.1".into(),
            qualification_item: "13.5".into(),
            asset_threshold_item: "13.7.4".into(),
            asset_threshold_label: "R$ 14 Bi".into(),
            appeal_item: "15.1".into(),
            appeal_denial_item: "15.1.1".into(),
            unviable_price_item: "10.2.4.4".into(),
            unviable_price_percent: 30,
        }
    }
}

/// Fixed parameters of the tender being conducted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderConfig {
    pub tender_id: String,
    pub agency: String,
    pub object: String,
    pub estimated_value: f64,
    pub net_worth_ratio: f64,
    pub min_bank_assets: f64,
    pub citations: Citations,
}

impl Default for TenderConfig {
    fn default() -> Self {
        Self {
            tender_id: DEFAULT_TENDER_ID.into(),
            agency: DEFAULT_AGENCY.into(),
            object: DEFAULT_OBJECT.into(),
            estimated_value: DEFAULT_ESTIMATED_VALUE,
            net_worth_ratio: DEFAULT_NET_WORTH_RATIO,
            min_bank_assets: DEFAULT_MIN_BANK_ASSETS,
            citations: Citations::default(),
        }
    }
}

impl TenderConfig {
    /// Load a config from a JSON file. Fields absent from the file keep
    /// their PE 90019/2025 defaults.
    pub fn load(path: &Path) -> Result<Self, CockpitError> {
        if !path.exists() {
            return Err(CockpitError::ConfigNotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        info!(path = %path.display(), tender = %config.tender_id, "loaded tender config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, CockpitError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the built-in tender.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CockpitError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                debug!("no config path given, using built-in tender");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), CockpitError> {
        if !self.estimated_value.is_finite() || self.estimated_value < 0.0 {
            return Err(CockpitError::InvalidConfig(format!(
                "estimated_value must be a non-negative amount, got {}",
                self.estimated_value
            )));
        }
        if !(self.net_worth_ratio > 0.0 && self.net_worth_ratio <= 1.0) {
            return Err(CockpitError::InvalidConfig(format!(
                "net_worth_ratio must be in (0, 1], got {}",
                self.net_worth_ratio
            )));
        }
        Ok(())
    }

    /// Net worth floor applied when the ratios do not all exceed 1.0.
    pub fn min_net_worth(&self) -> f64 {
        self.estimated_value * self.net_worth_ratio
    }
}
