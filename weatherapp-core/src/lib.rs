//! Core library for the `weatherapp` demo.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Feature-flag value lookup with default substitution
//! - The demo's small pure utilities: session tokens, condition-to-icon
//!   mapping, temperature conversion
//!
//! It is used by `weatherapp-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod flags;
pub mod icon;
pub mod ident;
pub mod model;
pub mod provider;
pub mod units;

pub use config::Config;
pub use flags::Flags;
pub use icon::{DEFAULT_ICON, icon_for_condition};
pub use ident::generate_guid;
pub use model::{WeatherRequest, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use units::{TemperatureScale, celsius_to_fahrenheit};
