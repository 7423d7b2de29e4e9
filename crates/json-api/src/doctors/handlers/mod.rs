//! Doctor Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod delete_all;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;
