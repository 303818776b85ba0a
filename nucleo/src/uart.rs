//! USART adapters of the NUCLEO-F767ZI for the [SerialLink] and [Monitor] ports.
//!
//! The developer console is USART3 on the ST-LINK virtual COM port, the Bluetooth module (HC-08)
//! sits on USART6 at the Arduino header pins D0/D1.

use embassy_stm32::mode::Async;
use embassy_stm32::usart::{Config, Error, UartRx, UartTx};

use bt_light::{Monitor, SerialLink};

#[macro_export]
macro_rules! setup_usart_developer_console {
    ($p:ident, $irqs:ident, $config:expr) => {
        // setup usart
        embassy_stm32::usart::Uart::new(
            $p.USART3,
            $p.PD9, // rx
            $p.PD8, // tx
            $irqs,
            $p.DMA1_CH4, // tx
            $p.DMA1_CH1, // rx
            $config,
        ).expect("USART generation failed")
    }
}

#[macro_export]
macro_rules! setup_usart_bluetooth_link {
    ($p:ident, $irqs:ident, $config:expr) => {
        // HC-08 TX goes to D0, HC-08 RX to D1
        embassy_stm32::usart::Uart::new(
            $p.USART6,
            $p.PG9,  // rx
            $p.PG14, // tx
            $irqs,
            $p.DMA2_CH6, // tx
            $p.DMA2_CH1, // rx
            $config,
        ).expect("USART generation failed")
    }
}

pub fn usart_config(baudrate: u32) -> Config {
    let mut config = Config::default();
    config.baudrate = baudrate;
    config
}

/// Serial link to the Bluetooth module. A burst ends when the line goes idle.
pub struct BluetoothLink {
    tx: UartTx<'static, Async>,
    rx: UartRx<'static, Async>,
}

impl BluetoothLink {
    pub fn new(tx: UartTx<'static, Async>, rx: UartRx<'static, Async>) -> Self {
        BluetoothLink { tx, rx }
    }
}

impl SerialLink for BluetoothLink {
    type Error = Error;

    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.rx.read_until_idle(buf).await.inspect_err(|err| {
            defmt::warn!("USART related error: {}", err);
        })
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.tx.write(bytes).await
    }
}

/// Line based diagnostic output on the developer console.
pub struct SerialMonitor {
    tx: UartTx<'static, Async>,
}

impl SerialMonitor {
    pub fn new(tx: UartTx<'static, Async>) -> Self {
        SerialMonitor { tx }
    }
}

impl Monitor for SerialMonitor {
    type Error = Error;

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.tx.write(line.as_bytes()).await?;
        self.tx.write(b"\r\n").await
    }
}
