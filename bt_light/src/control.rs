//! The command loop: wait for a burst on the Bluetooth link, echo it to the monitor, and answer
//! the two known commands.
//!
//! The loop owns its link, the light output, the monitor and the [LightState]. It is driven by a
//! single task, the only suspension point is [SerialLink::receive].

use heapless::String;

use crate::command::{decode_text, valid_prefix, Command};
use crate::config::{BANNER, MATCH_NOTICE, MONITOR_LINE_LEN, RECEIVED_PREFIX, RX_BUFFER_LEN};
use crate::error::ReceiveError;
use crate::light::{LightOutput, LightState};
use crate::port::{Monitor, SerialLink};

/// Outcome of one [CommandLoop::poll]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled<E> {
    /// the link reported an empty burst
    Idle,

    /// text arrived but is no command, nothing was answered
    Ignored,

    /// the command was executed and its reply handed to the link
    Matched(Command),

    /// the burst could not be read or decoded
    Dropped(ReceiveError<E>),
}

pub struct CommandLoop<L, O, M> {
    link: L,
    light: O,
    monitor: M,
    light_state: LightState,
}

impl<L, O, M> CommandLoop<L, O, M>
where
    L: SerialLink,
    O: LightOutput,
    M: Monitor,
{
    pub fn new(link: L, light: O, monitor: M) -> Self {
        CommandLoop {
            link,
            light,
            monitor,
            light_state: LightState::default(),
        }
    }

    /// Announces the controller on the monitor and drives the light to its initial (off) level.
    pub async fn start(&mut self) {
        for line in BANNER {
            self.note(line).await;
        }
        self.apply_light_state();
    }

    /// Never returns, calls [Self::start] once and [Self::poll] forever.
    pub async fn run(mut self) -> ! {
        self.start().await;
        loop {
            let _ = self.poll().await;
        }
    }

    /// One iteration: receive a burst and handle it.
    pub async fn poll(&mut self) -> Handled<L::Error> {
        let mut buf = [0u8; RX_BUFFER_LEN];
        let len = match self.link.receive(&mut buf).await {
            Ok(0) => return Handled::Idle,
            Ok(len) => len.min(buf.len()),
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("serial link related error, ignore transmission");
                return Handled::Dropped(ReceiveError::Link(err));
            }
        };

        let text = match decode_text(&buf[..len]) {
            Ok(text) => text,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("received invalid utf-8 ({} bytes), ignore transmission", len);
                self.note_received(valid_prefix(&buf[..len])).await;
                return Handled::Dropped(err);
            }
        };

        match self.handle_text(text).await {
            Some(cmd) => Handled::Matched(cmd),
            None => Handled::Ignored,
        }
    }

    /// Echoes the raw text to the monitor, then matches the text against the commands and executes
    /// the match. Only outer ascii whitespace is trimmed. Unknown text is ignored silently.
    pub async fn handle_text(&mut self, raw: &str) -> Option<Command> {
        self.note_received(raw).await;

        let cmd = Command::parse(raw.trim_ascii())?;
        self.note(MATCH_NOTICE).await;

        if cmd == Command::Light {
            self.light_state.toggle();
            self.apply_light_state();
        }

        if self.link.send(cmd.reply().as_bytes()).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("could not send reply to {}", cmd);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("{} handled, light is {}", cmd, self.light_state.as_str());

        Some(cmd)
    }

    pub fn light_state(&self) -> LightState {
        self.light_state
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn light(&self) -> &O {
        &self.light
    }

    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    pub fn into_parts(self) -> (L, O, M) {
        (self.link, self.light, self.monitor)
    }

    fn apply_light_state(&mut self) {
        let level = self.light_state.level();
        if self.light.write_level(level).is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("could not drive light to level {}", level.0);
        }
    }

    async fn note_received(&mut self, raw: &str) {
        let mut line: String<MONITOR_LINE_LEN> = String::new();
        // the prefix always fits, a burst longer than the line is cut
        let _ = line.push_str(RECEIVED_PREFIX);
        for c in raw.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.note(&line).await;
    }

    async fn note(&mut self, line: &str) {
        if self.monitor.write_line(line).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("monitor write failed");
        }
    }
}
