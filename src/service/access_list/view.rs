//! Paginated listings of allow and deny lists.
//!
//! Guild-wide listings show channels, then roles, then accounts as mentions.
//! Command-scoped listings show the command's accounts, roles and channels with their
//! stored names. Entries are numbered across the whole listing and packed greedily
//! into pages whose body never exceeds the embed description limit.

use sea_orm::DatabaseConnection;

use crate::{
    error::AppError,
    model::{
        access_list::{AccessList, AccessSelection},
        target::{Target, TargetKind},
        view::{ListPage, ViewFilter, ViewParam},
    },
    service::{access_list::AccessListService, guild_record::GuildRecordService},
};

/// Maximum length of a page body in characters.
pub const MAX_PAGE_LENGTH: usize = 2048;

const GUILD_ORDER: [TargetKind; 3] = [TargetKind::Channel, TargetKind::Role, TargetKind::Account];
const COMMAND_ORDER: [TargetKind; 3] =
    [TargetKind::Account, TargetKind::Role, TargetKind::Channel];

pub struct AccessListViewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessListViewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders one page of a list from freshly read state.
    ///
    /// # Arguments
    /// - `param` - Guild, list, kind filter, optional command scope and page index
    ///
    /// # Returns
    /// - `Ok(Some(ListPage))` - The requested page, clamped to the last page
    /// - `Ok(None)` - Nothing is listed for this selection
    /// - `Err(AppError)` - Database error while reading the list
    pub async fn page(&self, param: ViewParam) -> Result<Option<ListPage>, AppError> {
        let guild = GuildRecordService::new(self.db)
            .find_or_create(param.guild.clone())
            .await?;
        let list = AccessListService::new(self.db)
            .get(guild.guild_id, param.list)
            .await?;

        let entries = list_entries(&list, param.filter, param.command_name.as_deref());
        let pages = paginate(&entries, MAX_PAGE_LENGTH);
        if pages.is_empty() {
            return Ok(None);
        }

        let total = pages.len();
        let index = param.page.min(total - 1);

        Ok(Some(ListPage {
            guild_name: param.guild.guild_name,
            list: param.list,
            filter: param.filter,
            command_name: param.command_name,
            index,
            total,
            body: pages[index].clone(),
        }))
    }
}

/// Renders the entries of a list selection, numbered from 1.
pub fn list_entries(
    list: &AccessList,
    filter: ViewFilter,
    command_name: Option<&str>,
) -> Vec<String> {
    let Some(selection) = list.selection(command_name) else {
        return Vec::new();
    };

    let order = if command_name.is_some() {
        COMMAND_ORDER
    } else {
        GUILD_ORDER
    };

    ordered_targets(selection, filter, order)
        .into_iter()
        .enumerate()
        .map(|(i, (kind, target))| match command_name {
            Some(command) => format!("`{}` `{}`: {} ({})", i + 1, command, target.name, target.id),
            None => format!("`{}` {}", i + 1, kind.mention(target.id)),
        })
        .collect()
}

fn ordered_targets(
    selection: &AccessSelection,
    filter: ViewFilter,
    order: [TargetKind; 3],
) -> Vec<(TargetKind, &Target)> {
    order
        .into_iter()
        .filter(|kind| match filter {
            ViewFilter::All => true,
            ViewFilter::Kind(wanted) => *kind == wanted,
        })
        .flat_map(|kind| selection.targets(kind).iter().map(move |t| (kind, t)))
        .collect()
}

/// Packs entries into pages of at most `max_len` characters, one entry per line.
///
/// An entry that alone exceeds the limit is truncated on a character boundary.
pub fn paginate(entries: &[String], max_len: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = String::new();
    let mut page_len = 0;

    for entry in entries {
        let entry: String = entry.chars().take(max_len).collect();
        let entry_len = entry.chars().count();

        let needed = if page.is_empty() {
            entry_len
        } else {
            entry_len + 1
        };

        if page_len + needed > max_len {
            pages.push(std::mem::take(&mut page));
            page_len = 0;
        }

        if !page.is_empty() {
            page.push('\n');
            page_len += 1;
        }
        page.push_str(&entry);
        page_len += entry_len;
    }

    if !page.is_empty() {
        pages.push(page);
    }

    pages
}
