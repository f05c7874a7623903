use serde::{Deserialize, Serialize};
use crate::models::CrashGroupRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    NumberOfCrashes,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberOfCrashes => "number_of_crashes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub app_id: &'a str,
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    pub sort: SortField,
    pub order: SortOrder,
    pub symbolicated: bool,
}

impl<'a> PageRequest<'a> {
    /// Most frequent crashes first. Ordering does not affect tracking results.
    pub fn new(app_id: &'a str, page: u32, per_page: u32) -> Self {
        Self {
            app_id,
            page,
            per_page,
            sort: SortField::NumberOfCrashes,
            order: SortOrder::Desc,
            symbolicated: true,
        }
    }

    pub fn with_symbolicated(mut self, symbolicated: bool) -> Self {
        self.symbolicated = symbolicated;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrashPage {
    pub records: Vec<CrashGroupRecord>,
    pub total_pages: u32,
    /// Explicit service-level error indicator from the response.
    pub error: Option<String>,
}

impl CrashPage {
    pub fn ok(records: Vec<CrashGroupRecord>, total_pages: u32) -> Self {
        Self { records, total_pages, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { records: Vec::new(), total_pages: 0, error: Some(error.into()) }
    }
}
