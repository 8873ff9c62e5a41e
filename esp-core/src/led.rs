//! LED-Schalter für die WiFi-Demo
//!
//! Eine einfache GPIO-LED (an/aus) mit Zustands-Flag.
//! Der Zustand wird nur nach erfolgreichem Schreiben auf den Pin aktualisiert.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Zustand der LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    /// Kurzform für JSON ("on" / "off")
    pub fn as_str(self) -> &'static str {
        match self {
            LedState::On => "on",
            LedState::Off => "off",
        }
    }

    /// Anzeige-Text für Webseite und Logs
    pub fn label(self) -> &'static str {
        match self {
            LedState::On => "ON",
            LedState::Off => "OFF",
        }
    }
}

/// Schalt-Kommando, abgeleitet aus dem HTTP-Pfad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    TurnOn,
    TurnOff,
}

impl SwitchCommand {
    /// Zielzustand nach Ausführung des Kommandos
    pub fn target_state(self) -> LedState {
        match self {
            SwitchCommand::TurnOn => LedState::On,
            SwitchCommand::TurnOff => LedState::Off,
        }
    }

    /// HTTP-Pfad, über den das Kommando ausgelöst wird
    pub fn path(self) -> &'static str {
        match self {
            SwitchCommand::TurnOn => "/on",
            SwitchCommand::TurnOff => "/off",
        }
    }
}

impl core::convert::TryFrom<&str> for SwitchCommand {
    type Error = ();

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        match path {
            "/on" => Ok(Self::TurnOn),
            "/off" => Ok(Self::TurnOff),
            _ => Err(()),
        }
    }
}

/// Trait für den Hardware-Zugriff auf eine einfache LED
///
/// # Implementierungen
/// - **Production:** GpioLedSwitch (ESP32 GPIO Output)
/// - **Testing:** MockLedSwitch (in-memory Mock)
pub trait LedSwitch {
    /// Setzt den Pegel der LED (`true` = an)
    fn set_level(&mut self, on: bool) -> Result<(), LedError>;
}

/// LED mit Zustands-Flag
///
/// Hält den Schalter und den zuletzt erfolgreich gesetzten Zustand.
pub struct LedController<S: LedSwitch> {
    switch: S,
    state: LedState,
}

impl<S: LedSwitch> LedController<S> {
    /// Erstellt den Controller und schaltet die LED aus
    pub fn new(mut switch: S) -> Result<Self, LedError> {
        switch.set_level(false)?;
        Ok(Self {
            switch,
            state: LedState::Off,
        })
    }

    /// Führt ein Schalt-Kommando aus und liefert den neuen Zustand
    pub fn apply(&mut self, command: SwitchCommand) -> Result<LedState, LedError> {
        let target = command.target_state();
        self.switch.set_level(target.is_on())?;
        self.state = target;
        Ok(target)
    }

    pub fn state(&self) -> LedState {
        self.state
    }

    /// Zugriff auf den Schalter
    ///
    /// Die Firmware braucht das nicht, die Host-Tests prüfen darüber den Pin-Pegel.
    pub fn switch(&self) -> &S {
        &self.switch
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LedState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SwitchCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SwitchCommand::TurnOn => defmt::write!(fmt, "TurnOn"),
            SwitchCommand::TurnOff => defmt::write!(fmt, "TurnOff"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::TryFrom;

    struct PinStub {
        level: Option<bool>,
        fail: bool,
    }

    impl LedSwitch for PinStub {
        fn set_level(&mut self, on: bool) -> Result<(), LedError> {
            if self.fail {
                return Err(LedError::WriteFailed);
            }
            self.level = Some(on);
            Ok(())
        }
    }

    #[test]
    fn test_new_drives_led_off() {
        let led = LedController::new(PinStub {
            level: None,
            fail: false,
        })
        .unwrap();
        assert_eq!(led.state(), LedState::Off);
        assert_eq!(led.switch().level, Some(false));
    }

    #[test]
    fn test_new_fails_when_pin_fails() {
        let result = LedController::new(PinStub {
            level: None,
            fail: true,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_switch_command_from_path() {
        assert_eq!(SwitchCommand::try_from("/on"), Ok(SwitchCommand::TurnOn));
        assert_eq!(SwitchCommand::try_from("/off"), Ok(SwitchCommand::TurnOff));
        assert!(SwitchCommand::try_from("/").is_err());
        assert!(SwitchCommand::try_from("/ON").is_err());
    }

    #[test]
    fn test_switch_command_path_round_trip() {
        for cmd in [SwitchCommand::TurnOn, SwitchCommand::TurnOff] {
            assert_eq!(SwitchCommand::try_from(cmd.path()), Ok(cmd));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(LedState::On.label(), "ON");
        assert_eq!(LedState::Off.as_str(), "off");
    }
}
