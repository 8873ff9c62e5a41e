// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use core::net::Ipv4Addr;

use esp_core::color::DutyResolution;
use esp_core::{
    ApNetwork, ApSecurity, parse_u8, validate_channel, validate_max_connections, validate_ssid,
};

// ============================================================================
// WiFi Access Point Konfiguration (Demo: wifi_led)
// ============================================================================

/// WiFi SSID (Netzwerk-Name des Access Points)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
/// Muss 1..=32 Bytes lang sein, sonst bricht der Build ab
pub const WIFI_SSID: &str = match validate_ssid(env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
)) {
    Ok(ssid) => ssid,
    Err(_) => panic!("WIFI_SSID muss 1..=32 Bytes haben"),
};

/// WiFi Passwort (leer = offenes Netz, sonst 8..=63 Zeichen)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Sicherheits-Modus, beim Kompilieren aus dem Passwort abgeleitet
pub const WIFI_SECURITY: ApSecurity = match ApSecurity::for_password(WIFI_PASSWORD) {
    Ok(security) => security,
    Err(_) => panic!("WIFI_PASSWORD muss leer sein oder 8..=63 Zeichen haben"),
};

/// WiFi Kanal (1..=13), optional via WIFI_CHANNEL, Standard: 1
pub const WIFI_CHANNEL: u8 = match option_env!("WIFI_CHANNEL") {
    Some(value) => match parse_u8(value) {
        Ok(channel) => match validate_channel(channel) {
            Ok(channel) => channel,
            Err(_) => panic!("WIFI_CHANNEL muss zwischen 1 und 13 liegen"),
        },
        Err(_) => panic!("WIFI_CHANNEL ist keine Zahl"),
    },
    None => 1,
};

/// Maximale Anzahl gleichzeitig verbundener Stationen
/// Optional via WIFI_MAX_CONNECTIONS (1..=MAX_AP_CONNECTIONS), Standard: 4
pub const WIFI_MAX_CONNECTIONS: u8 = match option_env!("WIFI_MAX_CONNECTIONS") {
    Some(value) => match parse_u8(value) {
        Ok(max) => match validate_max_connections(max) {
            Ok(max) => max,
            Err(_) => panic!("WIFI_MAX_CONNECTIONS muss zwischen 1 und MAX_AP_CONNECTIONS liegen"),
        },
        Err(_) => panic!("WIFI_MAX_CONNECTIONS ist keine Zahl"),
    },
    None => 4,
};

/// Statische IP-Konfiguration des Access Points (192.168.1.1/24)
pub const AP_NETWORK: ApNetwork = ApNetwork::DEFAULT;

/// Eigene IP-Adresse (= Gateway für die Stationen)
pub const AP_IP: Ipv4Addr = AP_NETWORK.address;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Anzahl Sockets im embassy-net Stack
/// HTTP (HTTP_TASK_POOL_SIZE) + DHCP (1) + mDNS (1)
pub const NET_SOCKET_COUNT: usize = 6;

// ============================================================================
// LED Konfiguration (Demo: wifi_led)
// ============================================================================

/// GPIO-Pin für die LED (aktiv high)
pub const LED_GPIO_PIN: u8 = 5;

// ============================================================================
// DHCP-Server Konfiguration
// ============================================================================

/// Maximale Anzahl DHCP-Leases
pub const DHCP_MAX_LEASES: usize = 8;

/// Wartezeit nach DHCP-Fehler vor Neustart des Servers
pub const DHCP_RESTART_DELAY_MS: u64 = 500;

/// Puffer für ein DHCP-Paket (Standard MTU)
pub const DHCP_PACKET_BUFFER_SIZE: usize = 1500;

/// UDP TX/RX Buffer-Größe für den DHCP-Socket
pub const DHCP_UDP_BUFFER_SIZE: usize = 1024;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Der ESP32 wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "led";

/// mDNS TTL (Time To Live) in Sekunden
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353)
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port
pub const HTTP_PORT: u16 = 80;

/// Anzahl paralleler HTTP-Server Tasks
pub const HTTP_TASK_POOL_SIZE: usize = 4;

/// HTTP Buffer-Größe in Bytes (Request/Response Headers und Body)
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

// ============================================================================
// LEDC Konfiguration (Demo: ledc_color)
// ============================================================================

/// GPIO-Pins der RGB-LED (R, G, B)
pub const LED_RED_GPIO_PIN: u8 = 6;
pub const LED_GREEN_GPIO_PIN: u8 = 5;
pub const LED_BLUE_GPIO_PIN: u8 = 4;

/// PWM-Frequenz in kHz
pub const LEDC_FREQUENCY_KHZ: u32 = 1;

/// PWM-Auflösung: 13 Bit → Duty 0..=8191
pub const LEDC_RESOLUTION: DutyResolution = DutyResolution::Bits13;

/// Anzeigedauer pro Farbe
pub const COLOR_INTERVAL_MS: u64 = 2000;

// ============================================================================
// SPI / MAX7219 Konfiguration (Demo: spi_matrix)
// ============================================================================

/// SPI-Pins (kein MISO, der MAX7219 wird nur beschrieben)
pub const SPI_CLK_GPIO_PIN: u8 = 6;
pub const SPI_MOSI_GPIO_PIN: u8 = 7;
pub const SPI_CS_GPIO_PIN: u8 = 10;

/// SPI Taktfrequenz in kHz (1 MHz)
pub const SPI_FREQUENCY_KHZ: u32 = 1000;

/// Helligkeit der Matrix (0..=15), None = Chip-Default beibehalten
pub const MATRIX_INTENSITY: Option<u8> = None;

/// Anzeigedauer pro Scan-Schritt
pub const MATRIX_STEP_INTERVAL_MS: u64 = 1000;
