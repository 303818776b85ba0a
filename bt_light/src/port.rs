//! Port traits between the [CommandLoop](crate::CommandLoop) and the board.
//!
//! The board crate implements them on top of its UART drivers, the tests implement them with
//! in-memory mocks.

/// The serial channel behind the Bluetooth module.
#[allow(async_fn_in_trait)]
pub trait SerialLink {
    type Error;

    /// Waits for incoming bytes and reads everything that arrives until the line goes idle or the
    /// buffer is full. Returns the number of bytes written into `buf`, 0 if nothing arrived.
    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Sends the bytes as they are, no terminator is appended.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Diagnostic output for a human watching a serial monitor.
#[allow(async_fn_in_trait)]
pub trait Monitor {
    type Error;

    /// Writes `line` followed by a line terminator.
    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}
