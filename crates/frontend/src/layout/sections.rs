//! Top-level sections of the workbench
//!
//! Exactly one section is visible at a time. Every section key the navigation
//! emits maps to a variant; anything else is an [`UnknownSection`].

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    DataQuality,
    DataCleaning,
    Orders,
    OrderManagement,
    PowerBi,
    Export,
}

/// Side effect that runs whenever a section becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLoad {
    QualityReport,
    OrderManagementSetup,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl Section {
    pub fn all() -> [Section; 7] {
        [
            Section::Dashboard,
            Section::DataQuality,
            Section::DataCleaning,
            Section::Orders,
            Section::OrderManagement,
            Section::PowerBi,
            Section::Export,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::DataQuality => "data-quality",
            Section::DataCleaning => "data-cleaning",
            Section::Orders => "orders",
            Section::OrderManagement => "order-management",
            Section::PowerBi => "powerbi",
            Section::Export => "export",
        }
    }

    /// Page title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::DataQuality => "Data Quality",
            Section::DataCleaning => "Data Cleaning",
            Section::Orders => "Orders",
            Section::OrderManagement => "Order Management",
            Section::PowerBi => "Power BI",
            Section::Export => "Export Data",
        }
    }

    /// Label of the navigation entry
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Orders => "View Orders",
            Section::OrderManagement => "Manage Orders",
            other => other.title(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::DataQuality => "quality",
            Section::DataCleaning => "cleaning",
            Section::Orders => "orders",
            Section::OrderManagement => "manage",
            Section::PowerBi => "powerbi",
            Section::Export => "export",
        }
    }

    pub fn from_key(key: &str) -> Result<Section, UnknownSection> {
        Section::all()
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| UnknownSection(key.to_string()))
    }

    pub fn on_enter(&self) -> Option<SectionLoad> {
        match self {
            Section::DataQuality => Some(SectionLoad::QualityReport),
            Section::OrderManagement => Some(SectionLoad::OrderManagementSetup),
            _ => None,
        }
    }
}
