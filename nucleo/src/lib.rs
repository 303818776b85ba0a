//! Board support of the Bluetooth light controller for the NUCLEO-F767ZI.
//!
//! Implements the ports of [bt_light] with embassy-stm32 drivers:
//! - [uart::BluetoothLink] on USART6 (HC-08 module)
//! - [uart::SerialMonitor] on USART3 (ST-LINK virtual COM port)
//! - [light::GpioLight] on PF13 (Arduino D7)

#![no_std]

pub mod light;
pub mod uart;
