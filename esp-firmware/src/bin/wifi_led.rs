// Demo 1: WiFi Access Point mit Webseite, die eine GPIO-LED schaltet
// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

use defmt::{Debug2Format, info};

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_peripherie_demos::config::{
    AP_NETWORK, EXTRA_HEAP_SIZE, HTTP_PORT, HTTP_TASK_POOL_SIZE, LED_GPIO_PIN, MDNS_HOSTNAME,
    NET_SOCKET_COUNT, WIFI_HEAP_SIZE, WIFI_SSID,
};
use esp_peripherie_demos::hal::GpioLedSwitch;
use esp_peripherie_demos::tasks::{
    access_point_task, dhcp_server_task, http_server_task, mdns_responder_task, net_task,
};
use esp_peripherie_demos::{LedController, SharedLed};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert LED, WiFi im AP-Modus und den Netzwerk-Stack mit statischer IP,
/// spawnt AP-, DHCP-, HTTP- und mDNS-Tasks. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED zuerst: ohne schaltbaren Pin ist die Demo sinnlos
    let led = LedController::new(GpioLedSwitch::new(peripherals.GPIO5))
        .expect("Failed to initialize LED");
    info!("LED on GPIO{} ready (off)", LED_GPIO_PIN);

    static LED: static_cell::StaticCell<SharedLed> = static_cell::StaticCell::new();
    let led = &*LED.init(Mutex::new(led));

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net
    static RESOURCES: static_cell::StaticCell<StackResources<NET_SOCKET_COUNT>> =
        static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // Statische IP: der AP ist Gateway seines eigenen Netzes
    let net_config = NetConfig::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(AP_NETWORK.address, AP_NETWORK.prefix_len),
        gateway: Some(AP_NETWORK.gateway),
        dns_servers: Default::default(),
    });

    // embassy-net erstellt Stack + Runner (AP interface)
    let (stack, runner) = embassy_net::new(wifi_interface.ap, net_config, resources, seed);

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Spawn WiFi Tasks
    spawner.spawn(access_point_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_server_task(stack)).unwrap();

    // Spawn HTTP Server Tasks (mehrere für concurrent connections)
    for task_id in 0..HTTP_TASK_POOL_SIZE {
        spawner.spawn(http_server_task(task_id, stack, led)).unwrap();
    }

    // Spawn mDNS Responder Task (für led.local Hostname)
    spawner.spawn(mdns_responder_task(stack)).unwrap();

    info!(
        "Access point '{}' up, open http://{}:{}/ or http://{}.local/ (netmask {})",
        WIFI_SSID,
        Debug2Format(&AP_NETWORK.address),
        HTTP_PORT,
        MDNS_HOSTNAME,
        Debug2Format(&AP_NETWORK.netmask())
    );

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
