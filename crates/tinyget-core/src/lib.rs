pub mod config;
pub mod logging;

pub mod fetch;
pub mod loader;
pub mod response;
pub mod url_model;
