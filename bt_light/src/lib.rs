//! Hardware agnostic part of the Bluetooth light controller.
//!
//! A [CommandLoop] listens on a serial link bridged over Bluetooth for the commands `TEST` and
//! `LIGHT`. `TEST` is acknowledged, `LIGHT` toggles a single light and is confirmed. Every burst
//! received is echoed to a diagnostic monitor.
//!
//! The board crate provides the [port::SerialLink], [port::Monitor] and [light::LightOutput]
//! implementations.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod light;
pub mod port;

pub use command::Command;
pub use control::{CommandLoop, Handled};
pub use error::ReceiveError;
pub use light::{LightLevel, LightOutput, LightState, PwmLight};
pub use port::{Monitor, SerialLink};
