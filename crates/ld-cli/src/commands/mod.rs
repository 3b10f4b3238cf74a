//! CLI command implementations

pub(crate) mod common;
pub(crate) mod compare;
pub(crate) mod init;
