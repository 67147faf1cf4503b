pub mod bootstrap;
pub mod lazy_view;
pub mod route_table;
pub mod router;
pub mod store;
pub mod title_guard;
pub mod ui_library;
