// HTTP Server Task - Webseite zum Schalten der LED
use defmt::{error, info};
use embassy_net::Stack;
use embassy_time::Duration;
use esp_core::{LedStatus, SwitchCommand, led_page};
use picoserve::response::{IntoResponse, Json, Response, StatusCode};
use picoserve::routing::get;

use crate::SharedLed;
use crate::config::{
    HTTP_BUFFER_SIZE, HTTP_PORT, HTTP_TASK_POOL_SIZE, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE,
};

/// HTTP Server Task - läuft parallel zu den WiFi-Tasks
///
/// Routen:
/// - `GET /` → Seite mit aktuellem LED-Zustand
/// - `GET /on` → LED an, Seite mit neuem Zustand
/// - `GET /off` → LED aus, Seite mit neuem Zustand
/// - `GET /api/led` → `{"led":"on"|"off"}`
///
/// **Task Pool:** Diese Task wird `HTTP_TASK_POOL_SIZE` mal gespawnt,
/// damit ein hängender Client die anderen nicht blockiert.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz (0..HTTP_TASK_POOL_SIZE)
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `led`: gemeinsam genutzte LED (Mutex, Single Source of Truth)
#[embassy_executor::task(pool_size = HTTP_TASK_POOL_SIZE)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    led: &'static SharedLed,
) {
    info!(
        "HTTP: Server task {} starting on port {}...",
        task_id, HTTP_PORT
    );

    let app = picoserve::Router::new()
        .route("/", get(move || serve_page(led)))
        .route(
            SwitchCommand::TurnOn.path(),
            get(move || switch_led(led, SwitchCommand::TurnOn)),
        )
        .route(
            SwitchCommand::TurnOff.path(),
            get(move || switch_led(led, SwitchCommand::TurnOff)),
        )
        .route("/api/led", get(move || serve_status(led)));

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    let _ = server
        .listen_and_serve(task_id, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}

/// Liefert die Seite für den aktuellen Zustand (keine Seiteneffekte)
async fn serve_page(led: &'static SharedLed) -> impl IntoResponse {
    let state = led.lock().await.state();
    html(led_page(state))
}

/// Schaltet die LED und liefert die Seite für den neuen Zustand
///
/// Schlägt das Schreiben fehl, bleibt der alte Zustand bestehen und
/// die Seite zeigt diesen.
async fn switch_led(led: &'static SharedLed, command: SwitchCommand) -> impl IntoResponse {
    let mut led = led.lock().await;

    let state = match led.apply(command) {
        Ok(state) => {
            info!("HTTP: LED switched {}", state);
            state
        }
        Err(e) => {
            error!("HTTP: {} ({})", e, command);
            led.state()
        }
    };

    html(led_page(state))
}

/// JSON-Status der LED
async fn serve_status(led: &'static SharedLed) -> impl IntoResponse {
    let state = led.lock().await.state();
    Json(LedStatus::from(state))
}

fn html(page: &'static str) -> impl IntoResponse {
    Response::new(StatusCode::OK, page).with_header("Content-Type", "text/html; charset=utf-8")
}
