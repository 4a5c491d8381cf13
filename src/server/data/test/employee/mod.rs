use crate::server::{data::employee::EmployeeRepository, model::employee::EmployeeRecord};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
