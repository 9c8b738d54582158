//! Domain types and the ambient pieces shared by both front ends:
//! configuration, data directory, messages, validation and terminal views.

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod operations;
pub mod task;
pub mod validation;
pub mod view;
