// Library-Root: Gemeinsame Module der drei Peripherie-Demos
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    LedController, LedError, LedState, Max7219, NamedColor, SAMPLE_COLORS, SwitchCommand,
};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;

use crate::hal::GpioLedSwitch;

/// Gemeinsam genutzte LED der WiFi-Demo
///
/// Alle HTTP-Tasks laufen auf demselben Executor, daher reicht NoopRawMutex.
/// Der Controller hält den einzigen gültigen LED-Zustand.
pub type SharedLed = Mutex<NoopRawMutex, LedController<GpioLedSwitch>>;
