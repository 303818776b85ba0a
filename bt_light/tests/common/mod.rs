//! In-memory ports for driving a CommandLoop on the host.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use bt_light::{CommandLoop, LightLevel, LightOutput, Monitor, SerialLink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkFault;

/// Hands out queued bursts, one per receive, and records what is sent back.
#[derive(Default)]
pub struct MockLink {
    bursts: VecDeque<Result<Vec<u8>, LinkFault>>,
    pub sent: Vec<Vec<u8>>,
    pub fail_send: bool,
}

impl MockLink {
    pub fn with_bursts<'a>(bursts: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut link = MockLink::default();
        for burst in bursts {
            link.push(burst);
        }
        link
    }

    pub fn push(&mut self, burst: &[u8]) {
        self.bursts.push_back(Ok(burst.to_vec()));
    }

    pub fn push_fault(&mut self) {
        self.bursts.push_back(Err(LinkFault));
    }

    pub fn sent_text(&self) -> Vec<String> {
        self.sent
            .iter()
            .map(|bytes| String::from_utf8(bytes.clone()).expect("replies are utf-8"))
            .collect()
    }
}

impl SerialLink for MockLink {
    type Error = LinkFault;

    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.bursts.pop_front() {
            None => Ok(0),
            Some(Err(fault)) => Err(fault),
            Some(Ok(burst)) => {
                let len = burst.len().min(buf.len());
                buf[..len].copy_from_slice(&burst[..len]);
                Ok(len)
            }
        }
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_send {
            return Err(LinkFault);
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}

/// Records every level written to the light.
#[derive(Default)]
pub struct MockLight {
    pub levels: Vec<LightLevel>,
}

impl LightOutput for MockLight {
    type Error = core::convert::Infallible;

    fn write_level(&mut self, level: LightLevel) -> Result<(), Self::Error> {
        self.levels.push(level);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMonitor {
    pub lines: Vec<String>,
    pub broken: bool,
}

impl Monitor for MockMonitor {
    type Error = ();

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.broken {
            return Err(());
        }
        self.lines.push(line.into());
        Ok(())
    }
}

pub type TestLoop = CommandLoop<MockLink, MockLight, MockMonitor>;

pub fn command_loop(link: MockLink) -> TestLoop {
    CommandLoop::new(link, MockLight::default(), MockMonitor::default())
}
