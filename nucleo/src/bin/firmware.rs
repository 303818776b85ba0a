#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Level, Output, Speed};
use {defmt_rtt as _, panic_probe as _};

use bt_light::config::{LINK_BAUD_RATE, MONITOR_BAUD_RATE};
use bt_light::CommandLoop;

use nucleo_f767zi::light::GpioLight;
use nucleo_f767zi::uart::{usart_config, BluetoothLink, SerialMonitor};
use nucleo_f767zi::{setup_usart_bluetooth_link, setup_usart_developer_console};

bind_interrupts!(struct Irqs {
    USART3 => embassy_stm32::usart::InterruptHandler<embassy_stm32::peripherals::USART3>;
    USART6 => embassy_stm32::usart::InterruptHandler<embassy_stm32::peripherals::USART6>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    defmt::info!("Bluetooth light controller booting");

    // Arduino header D7
    let light = GpioLight::new(Output::new(p.PF13, Level::Low, Speed::Low));

    // only the tx half of the console is used
    let console = setup_usart_developer_console!(p, Irqs, usart_config(MONITOR_BAUD_RATE));
    let (console_tx, _console_rx) = console.split();

    let link = setup_usart_bluetooth_link!(p, Irqs, usart_config(LINK_BAUD_RATE));
    let (link_tx, link_rx) = link.split();

    let command_loop = CommandLoop::new(
        BluetoothLink::new(link_tx, link_rx),
        light,
        SerialMonitor::new(console_tx),
    );
    command_loop.run().await
}
