//! RGB-Farben und PWM-Duty-Berechnung für die LEDC-Demo

use rgb::RGB8;

use crate::led::LedError;

/// Farbe mit Anzeigename (für Logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: RGB8,
}

impl NamedColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: RGB8 { r, g, b },
        }
    }
}

/// Farb-Palette der Demo, in Abspiel-Reihenfolge
pub const SAMPLE_COLORS: [NamedColor; 6] = [
    NamedColor::new("Rot", 255, 0, 0),
    NamedColor::new("Grün", 0, 255, 0),
    NamedColor::new("Blau", 0, 0, 255),
    NamedColor::new("Gelb", 255, 255, 0),
    NamedColor::new("Lila", 128, 0, 128),
    NamedColor::new("Silber", 192, 192, 192),
];

/// PWM-Auflösung des LEDC-Timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyResolution {
    Bits8,
    Bits10,
    Bits12,
    Bits13,
    Bits14,
}

impl DutyResolution {
    pub const fn bits(self) -> u32 {
        match self {
            DutyResolution::Bits8 => 8,
            DutyResolution::Bits10 => 10,
            DutyResolution::Bits12 => 12,
            DutyResolution::Bits13 => 13,
            DutyResolution::Bits14 => 14,
        }
    }

    /// Maximaler Duty-Wert (z.B. 8191 bei 13 Bit)
    pub const fn max_duty(self) -> u32 {
        (1 << self.bits()) - 1
    }
}

/// Skaliert einen Farbkanal (0..=255) linear auf den Duty-Bereich
///
/// ```
/// # use esp_core::{DutyResolution, duty_for_level};
/// assert_eq!(duty_for_level(255, DutyResolution::Bits13), 8191);
/// assert_eq!(duty_for_level(128, DutyResolution::Bits13), 4111);
/// ```
pub const fn duty_for_level(level: u8, resolution: DutyResolution) -> u32 {
    resolution.max_duty() * level as u32 / u8::MAX as u32
}

/// Duty-Werte für die drei LEDC-Kanäle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbDuty {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl RgbDuty {
    pub const fn from_color(color: RGB8, resolution: DutyResolution) -> Self {
        Self {
            red: duty_for_level(color.r, resolution),
            green: duty_for_level(color.g, resolution),
            blue: duty_for_level(color.b, resolution),
        }
    }
}

/// Trait für RGB-LED Hardware-Zugriff
///
/// # Implementierungen
/// - **Production:** LedcRgbWriter (drei LEDC PWM-Kanäle)
/// - **Testing:** MockRgbWriter (in-memory Mock)
pub trait RgbLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Endlose Iteration über eine Farb-Palette
///
/// Liefert `(index, farbe)` und beginnt nach dem letzten Eintrag wieder bei 0.
pub struct ColorCycle<'a> {
    palette: &'a [NamedColor],
    index: usize,
}

impl<'a> ColorCycle<'a> {
    pub fn new(palette: &'a [NamedColor]) -> Self {
        Self { palette, index: 0 }
    }
}

impl<'a> Iterator for ColorCycle<'a> {
    type Item = (usize, NamedColor);

    fn next(&mut self) -> Option<Self::Item> {
        let color = *self.palette.get(self.index)?;
        let index = self.index;
        self.index = (self.index + 1) % self.palette.len();
        Some((index, color))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NamedColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} ({}, {}, {})",
            self.name,
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_bounds() {
        assert_eq!(duty_for_level(0, DutyResolution::Bits13), 0);
        assert_eq!(duty_for_level(255, DutyResolution::Bits13), 8191);
        assert_eq!(duty_for_level(255, DutyResolution::Bits8), 255);
    }

    #[test]
    fn test_duty_is_monotonic() {
        let mut last = 0;
        for level in 0..=u8::MAX {
            let duty = duty_for_level(level, DutyResolution::Bits13);
            assert!(duty >= last);
            last = duty;
        }
    }

    #[test]
    fn test_rgb_duty_silver() {
        let duty = RgbDuty::from_color(RGB8::new(192, 192, 192), DutyResolution::Bits13);
        assert_eq!(duty.red, 8191 * 192 / 255);
        assert_eq!(duty.red, duty.green);
        assert_eq!(duty.green, duty.blue);
    }

    #[test]
    fn test_cycle_wraps() {
        let palette = [NamedColor::new("a", 1, 0, 0), NamedColor::new("b", 0, 1, 0)];
        let mut cycle = ColorCycle::new(&palette);
        assert_eq!(cycle.next().map(|(i, _)| i), Some(0));
        assert_eq!(cycle.next().map(|(i, c)| (i, c.name)), Some((1, "b")));
        assert_eq!(cycle.next().map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_cycle_empty_palette() {
        let mut cycle = ColorCycle::new(&[]);
        assert_eq!(cycle.next(), None);
    }
}
