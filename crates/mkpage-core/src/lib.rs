pub mod config;
pub mod logging;
pub mod page;
pub mod template;
