//! Parameters and results of access list listings.

use crate::model::{
    access_list::AccessListKind, guild_record::FindOrCreateGuildRecordParam, target::TargetKind,
};

/// Which target kinds a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    Kind(TargetKind),
}

impl ViewFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kind(kind) => kind.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            other => TargetKind::parse(other).map(Self::Kind),
        }
    }
}

/// Parameters for rendering one page of a list.
#[derive(Debug, Clone)]
pub struct ViewParam {
    pub guild: FindOrCreateGuildRecordParam,
    pub list: AccessListKind,
    pub filter: ViewFilter,
    pub command_name: Option<String>,
    /// Zero-based page index; clamped to the last page.
    pub page: usize,
}

/// One rendered page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub guild_name: String,
    pub list: AccessListKind,
    pub filter: ViewFilter,
    pub command_name: Option<String>,
    /// Zero-based index of this page.
    pub index: usize,
    pub total: usize,
    pub body: String,
}
