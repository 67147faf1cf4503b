pub mod icon;
pub mod route_meta;
