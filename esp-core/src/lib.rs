//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE ESP-spezifischen Dependencies.
//! Sie definiert Traits, Pure Functions und den MAX7219-Treiber
//! (nur gegen die `embedded-hal` Traits), damit alles auf dem Host testbar ist.

#![no_std]

pub mod color;
pub mod config;
pub mod led;
pub mod matrix;
pub mod page;
pub mod wifi;

// Re-exports für einfachen Zugriff
pub use color::{
    ColorCycle, DutyResolution, NamedColor, RgbDuty, RgbLedWriter, SAMPLE_COLORS, duty_for_level,
};
pub use config::{ConfigError, parse_u8};
pub use led::{LedController, LedError, LedState, LedSwitch, SwitchCommand};
pub use matrix::{Frame, Max7219, MatrixError, Register, ScanAxis, ScanPattern, ScanStep};
pub use page::{LedStatus, led_page};
pub use wifi::{
    ApNetwork, ApSecurity, MAX_AP_CONNECTIONS, StationCounter, validate_channel,
    validate_max_connections, validate_ssid,
};
