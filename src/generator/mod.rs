pub mod config;
pub mod exports;
pub mod yaml;
