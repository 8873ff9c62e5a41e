// Farbwechsel Task - RGB-LED zeigt die Beispielfarben nacheinander
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_core::{ColorCycle, NamedColor, RgbLedWriter};

use crate::config::COLOR_INTERVAL_MS;
use crate::hal::LedcRgbWriter;

/// Farbwechsel Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Durchläuft die Palette endlos, schreibt jede Farbe auf die LED und
/// wartet `COLOR_INTERVAL_MS`. Ein fehlgeschlagenes Schreiben wird geloggt,
/// der Zyklus läuft mit der nächsten Farbe weiter.
///
/// # Parameter
/// - `led`: RGB Writer (Hardware oder Mock)
/// - `palette`: Farben in Anzeige-Reihenfolge
pub async fn color_cycle_logic<W: RgbLedWriter>(mut led: W, palette: &[NamedColor]) {
    for (index, named) in ColorCycle::new(palette) {
        info!("Color {}: {}", index, named.name);

        if let Err(e) = led.write(named.color) {
            error!("Failed to write color {}: {}", index, e);
        }

        Timer::after(Duration::from_millis(COLOR_INTERVAL_MS)).await;
    }

    error!("Color cycle: empty palette, nothing to show");
}

/// Farbwechsel Task
#[embassy_executor::task]
pub async fn color_cycle_task(led: LedcRgbWriter, palette: &'static [NamedColor]) {
    color_cycle_logic(led, palette).await;
}
