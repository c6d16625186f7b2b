use crate::data::case_counter::CaseCounterRepository;
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};
