pub mod navigation_guard;
pub mod response_hook;
pub mod view_source;
