pub mod api_utils;
pub mod components;
pub mod fetch_guard;
pub mod list_utils;
