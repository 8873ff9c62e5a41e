//! Webseite der WiFi-LED-Demo
//!
//! Die Seite ist statisch: pro LED-Zustand genau ein fertiger String,
//! zusammengesetzt zur Compile-Zeit.

use crate::led::LedState;

/// Gemeinsamer Button-Block (Links auf /on und /off)
macro_rules! led_buttons {
    () => {
        "<a href=\"/on\"><button>Turn ON</button></a><a href=\"/off\"><button>Turn OFF</button></a>"
    };
}

const PAGE_ON: &str = concat!("<h3>LED State: ON</h3>", led_buttons!());
const PAGE_OFF: &str = concat!("<h3>LED State: OFF</h3>", led_buttons!());

/// Liefert die HTML-Seite für den übergebenen LED-Zustand
pub fn led_page(state: LedState) -> &'static str {
    match state {
        LedState::On => PAGE_ON,
        LedState::Off => PAGE_OFF,
    }
}

/// JSON-Status für `GET /api/led`
///
/// Serialisiert zu `{"led":"on"}` bzw. `{"led":"off"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LedStatus {
    pub led: LedState,
}

impl From<LedState> for LedStatus {
    fn from(led: LedState) -> Self {
        Self { led }
    }
}
