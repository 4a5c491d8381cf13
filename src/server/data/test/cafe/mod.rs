use crate::server::{
    data::cafe::CafeRepository,
    model::cafe::{CreateCafeParams, UpdateCafeParams},
    util::bank::{validate_bank_details, BankDetails},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn bank_details() -> BankDetails {
    validate_bank_details("DE89 3704 0044 0532 0130 00", "COBADEFFXXX").unwrap()
}
