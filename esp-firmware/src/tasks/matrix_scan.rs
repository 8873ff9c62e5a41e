// Matrix Scan Task - Lauflicht auf der MAX7219 8x8 Matrix
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use embedded_hal::spi::SpiDevice;
use esp_core::{Max7219, ScanPattern};

use crate::config::MATRIX_STEP_INTERVAL_MS;
use crate::hal::MatrixSpiDevice;

/// Matrix Scan Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Zeigt nacheinander jede Zeile und danach jede Spalte, jeweils für
/// `MATRIX_STEP_INTERVAL_MS`. Der Treiber muss bereits initialisiert sein.
/// SPI-Fehler werden geloggt, der Scan läuft weiter.
pub async fn matrix_scan_logic<SPI: SpiDevice>(mut matrix: Max7219<SPI>) {
    for step in ScanPattern::new() {
        info!("Matrix: {}", step);

        if let Err(e) = matrix.show(&step.frame) {
            error!("Matrix: {} ({})", e, step);
        }

        Timer::after(Duration::from_millis(MATRIX_STEP_INTERVAL_MS)).await;
    }
}

/// Matrix Scan Task
#[embassy_executor::task]
pub async fn matrix_scan_task(matrix: Max7219<MatrixSpiDevice>) {
    matrix_scan_logic(matrix).await;
}
