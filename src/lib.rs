pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod rulesets;
pub mod settings;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{Proxy, ProxyBuilder, ProxyType};

// Re-export the conversion entry points
pub use generator::exports::clash::ClashTarget;
pub use interfaces::subconverter::{convert, Conversion};
pub use settings::{Settings, SettingsFormat};
