pub mod constants;
pub mod cookies;
pub mod errors;
pub mod icons;
pub mod routes;
pub mod widget;
