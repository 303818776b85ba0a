//! Compile time settings of the controller.
//!
//! Only the baud rates and the light pin are meant to change between boards, the pin lives in the
//! board crate. The command and reply strings are part of the wire contract with the BLE client.

/// baud rate of the HC-08 module (factory default)
pub const LINK_BAUD_RATE: u32 = 9600;

/// baud rate of the diagnostic monitor
pub const MONITOR_BAUD_RATE: u32 = 9600;

/// bytes read from the link in one burst, longer transmissions get split
pub const RX_BUFFER_LEN: usize = 64;

/// capacity of a single diagnostic line, long enough for a prefixed full burst
pub const MONITOR_LINE_LEN: usize = 96;

pub const TEST_COMMAND: &str = "TEST";
pub const LIGHT_COMMAND: &str = "LIGHT";

/// reply to [TEST_COMMAND]
pub const ACK_REPLY: &str = "Arduino command match function is good";

/// reply to [LIGHT_COMMAND], "light switched successfully"
pub const LIGHT_REPLY: &str = "开关灯泡成功";

/// printed on the monitor once at start
pub const BANNER: [&str; 2] = ["Arduino Bluetooth System Started", "By UkawaJun"];

/// precedes the echo of every received burst
pub const RECEIVED_PREFIX: &str = "Received from Python: ";
pub const MATCH_NOTICE: &str = "Command Match! Sending response...";
