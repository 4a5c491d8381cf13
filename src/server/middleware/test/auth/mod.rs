use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
