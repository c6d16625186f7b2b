//! Payloads carried in component custom ids.
//!
//! Buttons identify their action entirely through their custom id, so a click can be
//! resolved without any stored session state. A payload is a fixed prefix followed by
//! `;`-separated `key=value` pairs:
//!
//! - `move;l=<allow|deny>;k=<account|role|channel>;t=<id>[;c=<command>]`
//! - `move_cancel`
//! - `page;l=<allow|deny>;k=<all|account|role|channel>;p=<index>;n=<first|prev|next|last>[;c=<command>]`
//!
//! The `n` key names the navigation button, keeping custom ids unique within a message
//! when two buttons lead to the same page. Command names are restricted to letters,
//! digits, `-` and `_` and at most [`MAX_COMMAND_NAME_LENGTH`] characters, which keeps
//! them free of separators and every payload within Discord's custom id limit.

use crate::{
    error::payload::PayloadError,
    model::{access_list::AccessListKind, target::TargetKind, view::ViewFilter},
};

const MOVE_PREFIX: &str = "move";
const PAGE_PREFIX: &str = "page";
pub const MOVE_CANCEL_ID: &str = "move_cancel";

/// Longest custom id Discord accepts on a component.
pub const MAX_CUSTOM_ID_LENGTH: usize = 100;

/// Longest command name a list entry can be scoped to.
pub const MAX_COMMAND_NAME_LENGTH: usize = 32;

/// Whether a name can scope a list entry and be carried in a payload.
///
/// Mirrors the characters Discord allows in command names.
pub fn is_valid_command_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_COMMAND_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Confirmation of moving a target from the opposite list onto `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePayload {
    /// The list the target is moved to.
    pub list: AccessListKind,
    pub kind: TargetKind,
    pub target_id: u64,
    pub command_name: Option<String>,
}

impl MovePayload {
    pub fn encode(&self) -> String {
        let mut id = format!(
            "{};l={};k={};t={}",
            MOVE_PREFIX,
            self.list.as_str(),
            self.kind.as_str(),
            self.target_id
        );
        push_command(&mut id, self.command_name.as_deref());
        id
    }
}

/// Navigation buttons of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

impl PageControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "first" => Some(Self::First),
            "prev" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "last" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Navigation to a page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePayload {
    pub list: AccessListKind,
    pub filter: ViewFilter,
    pub page: usize,
    pub control: PageControl,
    pub command_name: Option<String>,
}

impl PagePayload {
    pub fn encode(&self) -> String {
        let mut id = format!(
            "{};l={};k={};p={};n={}",
            PAGE_PREFIX,
            self.list.as_str(),
            self.filter.as_str(),
            self.page,
            self.control.as_str()
        );
        push_command(&mut id, self.command_name.as_deref());
        id
    }
}

/// A decoded component custom id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentPayload {
    Move(MovePayload),
    MoveCancel,
    Page(PagePayload),
}

impl ComponentPayload {
    /// Decodes a component custom id.
    ///
    /// # Returns
    /// - `Ok(ComponentPayload)` - The decoded payload
    /// - `Err(PayloadError)` - Unknown prefix, missing key or unparsable value
    pub fn decode(custom_id: &str) -> Result<Self, PayloadError> {
        if custom_id == MOVE_CANCEL_ID {
            return Ok(Self::MoveCancel);
        }

        let (prefix, rest) = custom_id.split_once(';').unwrap_or((custom_id, ""));
        let fields = Fields::parse(custom_id, rest)?;

        match prefix {
            MOVE_PREFIX => Ok(Self::Move(MovePayload {
                list: fields.list()?,
                kind: fields.parsed("k", TargetKind::parse)?,
                target_id: fields.parsed("t", |v| v.parse().ok())?,
                command_name: fields.command()?,
            })),
            PAGE_PREFIX => Ok(Self::Page(PagePayload {
                list: fields.list()?,
                filter: fields.parsed("k", ViewFilter::parse)?,
                page: fields.parsed("p", |v| v.parse().ok())?,
                control: fields.parsed("n", PageControl::parse)?,
                command_name: fields.command()?,
            })),
            _ => Err(PayloadError::UnknownPrefix(custom_id.to_string())),
        }
    }
}

fn push_command(id: &mut String, command_name: Option<&str>) {
    if let Some(command_name) = command_name {
        id.push_str(";c=");
        id.push_str(command_name);
    }
}

struct Fields<'a> {
    payload: &'a str,
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Fields<'a> {
    fn parse(payload: &'a str, rest: &'a str) -> Result<Self, PayloadError> {
        let mut pairs = Vec::new();
        for pair in rest.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or(PayloadError::InvalidValue {
                key: "pair",
                value: pair.to_string(),
            })?;
            pairs.push((key, value));
        }

        Ok(Self { payload, pairs })
    }

    fn get(&self, key: &'static str) -> Option<&'a str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn parsed<T>(
        &self,
        key: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PayloadError> {
        let value = self.get(key).ok_or_else(|| PayloadError::MissingKey {
            key,
            payload: self.payload.to_string(),
        })?;

        parse(value).ok_or_else(|| PayloadError::InvalidValue {
            key,
            value: value.to_string(),
        })
    }

    fn list(&self) -> Result<AccessListKind, PayloadError> {
        self.parsed("l", AccessListKind::parse)
    }

    fn command(&self) -> Result<Option<String>, PayloadError> {
        match self.get("c") {
            None => Ok(None),
            Some(name) if is_valid_command_name(name) => Ok(Some(name.to_string())),
            Some(name) => Err(PayloadError::InvalidValue {
                key: "c",
                value: name.to_string(),
            }),
        }
    }
}
