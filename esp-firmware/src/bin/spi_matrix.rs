// Demo 3: MAX7219 8x8 LED-Matrix über SPI, Lauflicht über Zeilen und Spalten
#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

extern crate alloc;

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

use esp_peripherie_demos::Max7219;
use esp_peripherie_demos::config::{
    EXTRA_HEAP_SIZE, MATRIX_INTENSITY, SPI_CLK_GPIO_PIN, SPI_CS_GPIO_PIN, SPI_FREQUENCY_KHZ,
    SPI_MOSI_GPIO_PIN,
};
use esp_peripherie_demos::hal::matrix_spi_device;
use esp_peripherie_demos::tasks::matrix_scan_task;

esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert SPI2 und den MAX7219, danach läuft das Lauflicht im Task.
/// Schlägt die Initialisierung fehl, bricht die Demo ab.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let spi = matrix_spi_device(
        peripherals.SPI2,
        peripherals.GPIO6,
        peripherals.GPIO7,
        peripherals.GPIO10,
    )
    .expect("Failed to initialize SPI bus");

    info!(
        "SPI2 ready: SCK GPIO{}, MOSI GPIO{}, CS GPIO{}, {} kHz",
        SPI_CLK_GPIO_PIN, SPI_MOSI_GPIO_PIN, SPI_CS_GPIO_PIN, SPI_FREQUENCY_KHZ
    );

    let mut matrix = Max7219::new(spi);
    matrix.init().expect("Failed to initialize MAX7219");
    if let Some(level) = MATRIX_INTENSITY {
        matrix
            .set_intensity(level)
            .expect("Failed to set MAX7219 intensity");
    }
    info!("MAX7219 initialized, display cleared");

    spawner.spawn(matrix_scan_task(matrix)).unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
