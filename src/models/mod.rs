//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use clashgen::models::{ProxyBuilder, ProxyType};
//!
//! let proxy = ProxyBuilder::new(ProxyType::Trojan, "example.com", 443)
//!     .password(Some("secret"))
//!     .tls(true)
//!     .build();
//!
//! assert_eq!(proxy.hostname(), "example.com");
//! assert_eq!(proxy.password(), Some("secret"));
//! // Optional fields are either present or absent, never empty
//! assert_eq!(proxy.server_name(), None);
//! ```

mod builder;
mod proxy;
mod proxy_group_config;

pub use builder::ProxyBuilder;
pub use proxy::*;
pub use proxy_group_config::*;
