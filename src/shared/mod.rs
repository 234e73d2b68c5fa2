pub mod api;
pub mod config;
pub mod dates;
pub mod db;
pub mod list_input;
pub mod slug;
pub mod validation;
