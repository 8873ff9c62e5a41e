// DHCP-Server Task - Vergibt IP-Adressen an verbundene Stationen
//
// Der Access Point hat die statische Adresse AP_IP (192.168.1.1/24) und
// verteilt Leases im selben Netz. Gateway für die Clients ist der AP selbst.
//
// Technische Details:
// - Protokoll: DHCPv4 (RFC 2131), Server-Port 67
// - Library: edge-dhcp (no_std)
// - Adapter: edge-nal-embassy (embassy-net Integration)

use core::net::{Ipv4Addr, SocketAddr};

use defmt::{Debug2Format, error, info, warn};
use edge_dhcp::io::{self, DEFAULT_SERVER_PORT};
use edge_dhcp::server::{Server, ServerOptions};
use edge_nal::UdpBind;
use edge_nal_embassy::{Udp, UdpBuffers};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};

use crate::config::{
    AP_IP, DHCP_MAX_LEASES, DHCP_PACKET_BUFFER_SIZE, DHCP_RESTART_DELAY_MS, DHCP_UDP_BUFFER_SIZE,
};
use crate::tasks::wifi::wait_for_link;

type DhcpUdpBuffers = UdpBuffers<1, DHCP_UDP_BUFFER_SIZE, DHCP_UDP_BUFFER_SIZE>;

/// DHCP Server Task
///
/// Bindet einen UDP-Socket auf `0.0.0.0:67` und beantwortet
/// DISCOVER/REQUEST der Stationen. Fehler im Server-Loop werden geloggt,
/// danach läuft der Server mit denselben Leases weiter.
#[embassy_executor::task]
pub async fn dhcp_server_task(stack: &'static Stack<'static>) {
    info!("DHCP: Task started, waiting for access point link...");
    wait_for_link(stack).await;

    // Buffers leben im Task-Future (statisch allokiert durch embassy)
    let udp_buffers = DhcpUdpBuffers::new();

    loop {
        if let Err(e) = run_dhcp_server(stack, &udp_buffers).await {
            error!("DHCP: Error: {}", e);
        }
        Timer::after(Duration::from_millis(DHCP_RESTART_DELAY_MS)).await;
    }
}

/// Führt den DHCP-Server aus, bis der Socket nicht gebunden werden kann
///
/// Die Lease-Tabelle lebt so lange wie der Socket.
async fn run_dhcp_server(
    stack: &'static Stack<'static>,
    udp_buffers: &DhcpUdpBuffers,
) -> Result<(), DhcpError> {
    let udp_stack = Udp::new(*stack, udp_buffers);

    let mut socket = udp_stack
        .bind(SocketAddr::new(
            Ipv4Addr::UNSPECIFIED.into(),
            DEFAULT_SERVER_PORT,
        ))
        .await
        .map_err(|_| DhcpError::SocketBindFailed)?;

    let mut packet_buf = [0u8; DHCP_PACKET_BUFFER_SIZE];
    let mut gateways = [AP_IP];
    let options = ServerOptions::new(AP_IP, Some(&mut gateways));
    let mut server = Server::<_, DHCP_MAX_LEASES>::new_with_et(AP_IP);

    info!(
        "DHCP: Server running on {} (max {} leases)",
        Debug2Format(&AP_IP),
        DHCP_MAX_LEASES
    );

    loop {
        if let Err(e) = io::server::run(&mut server, &options, &mut socket, &mut packet_buf).await {
            warn!("DHCP: Server error: {}", Debug2Format(&e));
            Timer::after(Duration::from_millis(DHCP_RESTART_DELAY_MS)).await;
        }
    }
}

/// DHCP Fehler-Typen
#[derive(Debug)]
enum DhcpError {
    /// UDP Socket konnte nicht auf Port 67 gebunden werden
    SocketBindFailed,
}

impl defmt::Format for DhcpError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DhcpError::SocketBindFailed => defmt::write!(fmt, "Socket bind failed"),
        }
    }
}
