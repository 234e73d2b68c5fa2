mod admin_access;

pub use admin_access::{AdminAccess, API_KEY_HEADER};
