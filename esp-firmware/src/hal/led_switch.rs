// GPIO LED Schalter
//
// Einfache LED an einem GPIO-Pin (aktiv high).

use esp_core::{LedError, LedSwitch};
use esp_hal::gpio::{Level, Output, OutputConfig};

/// Real Hardware LED Switch
///
/// Der Pin startet mit Low-Pegel (LED aus).
pub struct GpioLedSwitch {
    pin: Output<'static>,
}

impl GpioLedSwitch {
    /// Erstellt den Schalter auf GPIO5 (siehe `LED_GPIO_PIN`)
    pub fn new(gpio5: esp_hal::peripherals::GPIO5<'static>) -> Self {
        let pin = Output::new(gpio5, Level::Low, OutputConfig::default());
        Self { pin }
    }
}

impl LedSwitch for GpioLedSwitch {
    fn set_level(&mut self, on: bool) -> Result<(), LedError> {
        // GPIO-Schreiben ist infallible
        self.pin.set_level(Level::from(on));
        Ok(())
    }
}
