//! # Converter configuration
//!
//! Configuration is instantiated through [`ConverterConfBuilder`] which validates every option
//! against autopilot limits. [`ConverterConf::default`] yields a valid configuration with defaults
//! from [`consts`](crate::consts).

mod conf_builder;
mod converter_conf;

pub use conf_builder::ConverterConfBuilder;
pub use converter_conf::ConverterConf;
