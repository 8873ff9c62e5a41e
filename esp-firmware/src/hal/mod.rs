// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// damit die Demo-Logik mit Mocks auf dem Host getestet werden kann.

pub mod led_switch;
pub mod ledc_writer;
pub mod matrix_bus;

pub use led_switch::GpioLedSwitch;
pub use ledc_writer::{LedcError, LedcRgbWriter};
pub use matrix_bus::{MatrixBusError, MatrixSpiDevice, matrix_spi_device};
