//! Supports hardware agnostic control of the single light behind the controller.
//!
//! The light is switched like a binary lamp, but the output is written as a PWM level
//! ([LightLevel::FULL_ON] / [LightLevel::FULL_OFF]) so the pin may be either a plain GPIO or a
//! timer channel. [PwmLight] adapts any `embedded-hal` PWM channel and is meant for boards that
//! wire the light to a timer output; the NUCLEO board crate switches a GPIO instead.

use embedded_hal::pwm::SetDutyCycle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightState {
    #[default]
    Off,
    On,
}

impl LightState {
    pub fn toggle(&mut self) {
        *self = match self {
            LightState::Off => LightState::On,
            LightState::On => LightState::Off,
        };
    }

    pub fn is_on(&self) -> bool {
        *self == LightState::On
    }

    /// the level that has to be driven on the pin for this state
    pub fn level(&self) -> LightLevel {
        if self.is_on() {
            LightLevel::FULL_ON
        } else {
            LightLevel::FULL_OFF
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LightState::Off => "off",
            LightState::On => "on",
        }
    }
}

/// 8 bit output level of the light pin
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightLevel(pub u8);

impl LightLevel {
    pub const FULL_ON: LightLevel = LightLevel(255);
    pub const FULL_OFF: LightLevel = LightLevel(0);

    pub fn is_off(&self) -> bool {
        self.0 == 0
    }
}

/// Output side of the light, implemented by the board.
pub trait LightOutput {
    type Error;

    fn write_level(&mut self, level: LightLevel) -> Result<(), Self::Error>;
}

/// Drives the light through a PWM channel, the level is scaled onto the channel's max duty.
pub struct PwmLight<P> {
    channel: P,
}

impl<P: SetDutyCycle> PwmLight<P> {
    pub fn new(channel: P) -> Self {
        PwmLight { channel }
    }

    pub fn into_inner(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> LightOutput for PwmLight<P> {
    type Error = P::Error;

    fn write_level(&mut self, level: LightLevel) -> Result<(), Self::Error> {
        match level {
            LightLevel::FULL_OFF => self.channel.set_duty_cycle_fully_off(),
            LightLevel::FULL_ON => self.channel.set_duty_cycle_fully_on(),
            LightLevel(part) => self
                .channel
                .set_duty_cycle_fraction(part.into(), LightLevel::FULL_ON.0.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct DutyRecorder {
        max: u16,
        duty: Option<u16>,
    }

    impl ErrorType for DutyRecorder {
        type Error = Infallible;
    }

    impl SetDutyCycle for DutyRecorder {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = Some(duty);
            Ok(())
        }
    }

    #[test]
    fn starts_off() {
        let state = LightState::default();
        assert_eq!(state, LightState::Off);
        assert_eq!(state.level(), LightLevel::FULL_OFF);
    }

    #[test]
    fn toggle_alternates() {
        let mut state = LightState::Off;
        state.toggle();
        assert_eq!(state.level(), LightLevel::FULL_ON);
        state.toggle();
        assert_eq!(state.level(), LightLevel::FULL_OFF);
        state.toggle();
        assert!(state.is_on());
    }

    #[test]
    fn pwm_light_scales_to_max_duty() {
        let mut light = PwmLight::new(DutyRecorder { max: 1000, duty: None });

        light.write_level(LightLevel::FULL_ON).unwrap();
        assert_eq!(light.channel.duty, Some(1000));

        light.write_level(LightLevel::FULL_OFF).unwrap();
        assert_eq!(light.channel.duty, Some(0));

        light.write_level(LightLevel(51)).unwrap();
        assert_eq!(light.into_inner().duty, Some(200));
    }
}
