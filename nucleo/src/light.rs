//! The light on Arduino header pin D7 (PF13), driven as a plain push-pull output.

use core::convert::Infallible;

use embassy_stm32::gpio::Output;

use bt_light::{LightLevel, LightOutput};

/// Binary light, every level above [LightLevel::FULL_OFF] switches it on.
pub struct GpioLight<'a> {
    output: Output<'a>,
}

impl<'a> GpioLight<'a> {
    pub fn new(output: Output<'a>) -> Self {
        GpioLight { output }
    }
}

impl LightOutput for GpioLight<'_> {
    type Error = Infallible;

    fn write_level(&mut self, level: LightLevel) -> Result<(), Self::Error> {
        if level.is_off() {
            self.output.set_low();
        } else {
            self.output.set_high();
        }
        Ok(())
    }
}
