use super::{guild_param, GUILD_ID};
use crate::{
    error::AppError,
    model::{
        access_list::AccessListKind,
        target::TargetKind,
        view::{ViewFilter, ViewParam},
    },
    service::access_list::view::{AccessListViewService, MAX_PAGE_LENGTH},
};
use test_utils::{builder::TestBuilder, factory};


fn view_param(filter: ViewFilter, command_name: Option<&str>, page: usize) -> ViewParam {
    ViewParam {
        guild: guild_param(),
        list: AccessListKind::Allow,
        filter,
        command_name: command_name.map(str::to_string),
        page,
    }
}
