// Demo 2: RGB-LED zeigt über LEDC PWM nacheinander sechs Farben
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

use esp_peripherie_demos::SAMPLE_COLORS;
use esp_peripherie_demos::config::{
    EXTRA_HEAP_SIZE, LED_BLUE_GPIO_PIN, LED_GREEN_GPIO_PIN, LED_RED_GPIO_PIN, LEDC_FREQUENCY_KHZ,
    LEDC_RESOLUTION,
};
use esp_peripherie_demos::hal::LedcRgbWriter;
use esp_peripherie_demos::tasks::color_cycle_task;

esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert LEDC (Timer 0, drei Kanäle) und startet den Farbzyklus-Task.
/// Schlägt die Initialisierung fehl, bricht die Demo ab.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Kein WiFi, ein kleiner Heap reicht für die Runtime
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let led = LedcRgbWriter::new(
        peripherals.LEDC,
        peripherals.GPIO6,
        peripherals.GPIO5,
        peripherals.GPIO4,
        LEDC_RESOLUTION,
        LEDC_FREQUENCY_KHZ,
    )
    .expect("Failed to initialize LEDC");

    info!(
        "RGB LED on GPIO{} (R) / GPIO{} (G) / GPIO{} (B), {} kHz, {} bit",
        LED_RED_GPIO_PIN,
        LED_GREEN_GPIO_PIN,
        LED_BLUE_GPIO_PIN,
        LEDC_FREQUENCY_KHZ,
        LEDC_RESOLUTION.bits()
    );

    spawner
        .spawn(color_cycle_task(led, &SAMPLE_COLORS))
        .unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
