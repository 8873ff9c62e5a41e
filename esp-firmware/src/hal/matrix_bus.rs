// SPI-Anbindung der MAX7219 LED-Matrix
//
// SPI2 als Master, nur MOSI + SCK (der MAX7219 wird nie gelesen).
// Chip-Select übernimmt ExclusiveDevice, damit jede Register-Schreiboperation
// genau einen CS-Zyklus bekommt.

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config, Spi};
use esp_hal::time::Rate;
use esp_hal::Blocking;

use crate::config::SPI_FREQUENCY_KHZ;

// Type Aliases
pub type MatrixSpiBus = Spi<'static, Blocking>;
pub type MatrixSpiDevice = ExclusiveDevice<MatrixSpiBus, Output<'static>, Delay>;

/// Fehler beim Aufbau des SPI-Device
#[derive(Debug)]
pub enum MatrixBusError {
    /// SPI-Konfiguration vom Treiber abgelehnt
    SpiConfig,
    /// Chip-Select Pin konnte nicht gesetzt werden
    ChipSelect,
}

impl defmt::Format for MatrixBusError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MatrixBusError::SpiConfig => defmt::write!(fmt, "SPI config rejected"),
            MatrixBusError::ChipSelect => defmt::write!(fmt, "Chip select failed"),
        }
    }
}

/// Erstellt das SPI-Device für die Matrix
///
/// # Parameter
/// - `spi2`: SPI2 Peripheral
/// - `sck`: GPIO6 (Takt)
/// - `mosi`: GPIO7 (Daten)
/// - `cs`: GPIO10 (Chip-Select, aktiv low)
pub fn matrix_spi_device(
    spi2: esp_hal::peripherals::SPI2<'static>,
    sck: esp_hal::peripherals::GPIO6<'static>,
    mosi: esp_hal::peripherals::GPIO7<'static>,
    cs: esp_hal::peripherals::GPIO10<'static>,
) -> Result<MatrixSpiDevice, MatrixBusError> {
    // SPI Mode 0, 1 MHz
    let spi_cfg = Config::default()
        .with_frequency(Rate::from_khz(SPI_FREQUENCY_KHZ))
        .with_mode(Mode::_0);

    let spi_bus = Spi::new(spi2, spi_cfg)
        .map_err(|_| MatrixBusError::SpiConfig)?
        .with_sck(sck)
        .with_mosi(mosi);

    // CS idle high
    let cs = Output::new(cs, Level::High, OutputConfig::default());

    ExclusiveDevice::new(spi_bus, cs, Delay::new()).map_err(|_| MatrixBusError::ChipSelect)
}
