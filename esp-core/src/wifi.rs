//! Access-Point Einstellungen für die WiFi-LED-Demo

use core::net::Ipv4Addr;

use crate::config::ConfigError;

/// Sicherheits-Modus des Access Points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApSecurity {
    /// Offenes Netz (leeres Passwort)
    Open,
    /// WPA/WPA2-PSK
    WpaWpa2Personal,
}

impl ApSecurity {
    /// Wählt den Modus anhand des Passworts
    ///
    /// - leer → `Open`
    /// - 8..=63 Zeichen → `WpaWpa2Personal`
    /// - sonst → `ConfigError::InvalidPasswordLength`
    pub const fn for_password(password: &str) -> Result<Self, ConfigError> {
        match password.len() {
            0 => Ok(ApSecurity::Open),
            8..=63 => Ok(ApSecurity::WpaWpa2Personal),
            _ => Err(ConfigError::InvalidPasswordLength),
        }
    }
}

/// Prüft einen WiFi-Kanal (2.4 GHz, 1..=13)
pub const fn validate_channel(channel: u8) -> Result<u8, ConfigError> {
    match channel {
        1..=13 => Ok(channel),
        _ => Err(ConfigError::InvalidChannel),
    }
}

/// Obergrenze gleichzeitiger Stationen des ESP Access Points
pub const MAX_AP_CONNECTIONS: u8 = 10;

/// Prüft die SSID (802.11: 1..=32 Bytes)
pub const fn validate_ssid(ssid: &str) -> Result<&str, ConfigError> {
    match ssid.len() {
        1..=32 => Ok(ssid),
        _ => Err(ConfigError::InvalidSsidLength),
    }
}

/// Prüft die maximale Anzahl Stationen (1..=MAX_AP_CONNECTIONS)
pub const fn validate_max_connections(max: u8) -> Result<u8, ConfigError> {
    match max {
        1..=MAX_AP_CONNECTIONS => Ok(max),
        _ => Err(ConfigError::InvalidMaxConnections),
    }
}

/// Statische Netzwerk-Konfiguration des Access Points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApNetwork {
    pub address: Ipv4Addr,
    pub prefix_len: u8,
    pub gateway: Ipv4Addr,
}

impl ApNetwork {
    /// 192.168.1.1/24, Gateway = eigene Adresse
    pub const DEFAULT: ApNetwork = ApNetwork {
        address: Ipv4Addr::new(192, 168, 1, 1),
        prefix_len: 24,
        gateway: Ipv4Addr::new(192, 168, 1, 1),
    };

    /// Netzmaske aus der Präfix-Länge (Präfix > 32 zählt als /32)
    pub const fn netmask(&self) -> Ipv4Addr {
        let prefix = if self.prefix_len > 32 {
            32
        } else {
            self.prefix_len as u32
        };
        let bits = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
        Ipv4Addr::from_bits(bits)
    }
}

/// Zählt verbundene Stationen (nur für Log-Ausgaben)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationCounter {
    connected: u8,
}

impl StationCounter {
    pub const fn new() -> Self {
        Self { connected: 0 }
    }

    /// Station ist beigetreten, liefert neue Anzahl
    pub fn joined(&mut self) -> u8 {
        self.connected = self.connected.saturating_add(1);
        self.connected
    }

    /// Station hat das Netz verlassen, liefert neue Anzahl
    ///
    /// Ein Leave-Event ohne vorheriges Join (z.B. nach Neustart des AP)
    /// lässt den Zähler bei 0.
    pub fn left(&mut self) -> u8 {
        self.connected = self.connected.saturating_sub(1);
        self.connected
    }

    pub fn connected(&self) -> u8 {
        self.connected
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ApSecurity {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ApSecurity::Open => defmt::write!(fmt, "Open"),
            ApSecurity::WpaWpa2Personal => defmt::write!(fmt, "WPA/WPA2-PSK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_for_password() {
        assert_eq!(ApSecurity::for_password(""), Ok(ApSecurity::Open));
        assert_eq!(
            ApSecurity::for_password("mypassword"),
            Ok(ApSecurity::WpaWpa2Personal)
        );
        assert_eq!(
            ApSecurity::for_password("short"),
            Err(ConfigError::InvalidPasswordLength)
        );
    }

    #[test]
    fn test_default_network() {
        let net = ApNetwork::DEFAULT;
        assert_eq!(net.address, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 0));
    }

    #[test]
    fn test_netmask_prefix_bounds() {
        let mut net = ApNetwork::DEFAULT;
        net.prefix_len = 0;
        assert_eq!(net.netmask(), Ipv4Addr::new(0, 0, 0, 0));
        net.prefix_len = 32;
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 255));
        net.prefix_len = 40;
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_station_counter_saturates() {
        let mut counter = StationCounter::new();
        assert_eq!(counter.left(), 0);
        assert_eq!(counter.joined(), 1);
        assert_eq!(counter.joined(), 2);
        assert_eq!(counter.left(), 1);
    }
}
