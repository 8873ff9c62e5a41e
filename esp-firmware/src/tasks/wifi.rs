// WiFi Task - Betreibt den Access Point und loggt Stations-Events
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_core::{ApSecurity, StationCounter};
use esp_radio::wifi::{
    AccessPointConfig, AuthMethod, ModeConfig, WifiController, WifiDevice, WifiEvent,
};

use crate::config::{
    WIFI_CHANNEL, WIFI_MAX_CONNECTIONS, WIFI_PASSWORD, WIFI_SECURITY, WIFI_SSID,
};

/// Access Point Task
///
/// Managed den Access Point:
/// - Konfiguriert SSID, Passwort, Kanal und maximale Stationen
/// - Startet den AP (bei Fehler: erneuter Versuch nach 5 s)
/// - Loggt beitretende und verlassende Stationen
#[embassy_executor::task]
pub async fn access_point_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting access point task");

    let mut stations = StationCounter::new();

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            info!("WiFi: Configuring access point '{}'...", WIFI_SSID);

            let ap_config = ModeConfig::AccessPoint(
                AccessPointConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into())
                    .with_channel(WIFI_CHANNEL)
                    .with_max_connections(WIFI_MAX_CONNECTIONS.into())
                    .with_auth_method(auth_method(WIFI_SECURITY)),
            );

            if let Err(e) = controller.set_config(&ap_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(5)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(5)).await;
                continue;
            }

            info!(
                "WiFi init done. SSID: {}, channel: {}, security: {}",
                WIFI_SSID, WIFI_CHANNEL, WIFI_SECURITY
            );
        }

        // Auf Stations-Events warten (Events ändern nichts am Programmablauf)
        // Bereits anstehende Events nicht verwerfen, sonst driftet der Zähler
        let events = controller
            .wait_for_events(
                WifiEvent::ApStaConnected | WifiEvent::ApStaDisconnected | WifiEvent::ApStop,
                false,
            )
            .await;

        if events.contains(WifiEvent::ApStaConnected) {
            info!("WiFi: New station joined ({} connected)", stations.joined());
        }
        if events.contains(WifiEvent::ApStaDisconnected) {
            info!("WiFi: A station left ({} connected)", stations.left());
        }
        if events.contains(WifiEvent::ApStop) {
            warn!("WiFi: Access point stopped, restarting...");
            stations = StationCounter::new();
            Timer::after(Duration::from_secs(2)).await;
        }
    }
}

/// Übersetzt den Sicherheits-Modus in die esp-radio Auth-Methode
fn auth_method(security: ApSecurity) -> AuthMethod {
    match security {
        ApSecurity::Open => AuthMethod::None,
        ApSecurity::WpaWpa2Personal => AuthMethod::WpaWpa2Personal,
    }
}

/// Network Task
///
/// Überwacht den Netzwerk-Stack:
/// - Prozessiert Netzwerk-Pakete
/// - Managed TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Wartet bis der AP-Link oben ist
///
/// Die IP ist statisch, daher reicht der Link-Status.
/// Prüft alle 500ms.
pub async fn wait_for_link(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}
