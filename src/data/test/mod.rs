mod access_list;
mod audit_action;
mod case_counter;
mod guild_record;
