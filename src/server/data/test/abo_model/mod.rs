use crate::server::{data::abo_model::AboModelRepository, model::abo_model::AboModel};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
