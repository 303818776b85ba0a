use thiserror::Error;

/// Reasons a received burst is dropped. None of them stop the controller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiveError<E> {
    #[error("serial link related error, ignore transmission")]
    Link(E),

    #[error("received invalid utf-8 over serial link, ignore transmission")]
    Utf8,
}
