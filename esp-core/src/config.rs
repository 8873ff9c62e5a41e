//! Hilfen für Build-Zeit-Konfiguration
//!
//! Werte aus `.env` kommen als `&'static str` über `env!`/`option_env!`
//! in die Firmware. Die Funktionen hier sind `const`, damit ungültige Werte
//! schon beim Kompilieren auffallen.

/// Fehler bei der Konfigurations-Prüfung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Leerer String oder Zeichen außer 0-9
    InvalidNumber,
    /// Zahl passt nicht in den Ziel-Typ
    NumberOutOfRange,
    /// WPA-Passwort muss 8..=63 Zeichen haben (oder leer für offenes Netz)
    InvalidPasswordLength,
    /// WiFi-Kanal außerhalb 1..=13
    InvalidChannel,
    /// SSID muss 1..=32 Bytes haben
    InvalidSsidLength,
    /// Maximale Stationen außerhalb 1..=MAX_AP_CONNECTIONS
    InvalidMaxConnections,
}

/// Parst eine Dezimalzahl (0..=255)
///
/// ```
/// # use esp_core::parse_u8;
/// const CHANNEL: u8 = match parse_u8("6") {
///     Ok(v) => v,
///     Err(_) => panic!("invalid"),
/// };
/// assert_eq!(CHANNEL, 6);
/// ```
pub const fn parse_u8(s: &str) -> Result<u8, ConfigError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ConfigError::InvalidNumber);
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return Err(ConfigError::InvalidNumber);
        }
        value = value * 10 + (b - b'0') as u32;
        if value > u8::MAX as u32 {
            return Err(ConfigError::NumberOutOfRange);
        }
        i += 1;
    }

    Ok(value as u8)
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::InvalidNumber => defmt::write!(fmt, "Invalid number"),
            ConfigError::NumberOutOfRange => defmt::write!(fmt, "Number out of range"),
            ConfigError::InvalidPasswordLength => defmt::write!(fmt, "Invalid password length"),
            ConfigError::InvalidChannel => defmt::write!(fmt, "Invalid channel"),
            ConfigError::InvalidSsidLength => defmt::write!(fmt, "Invalid SSID length"),
            ConfigError::InvalidMaxConnections => defmt::write!(fmt, "Invalid max connections"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u8_valid() {
        assert_eq!(parse_u8("0"), Ok(0));
        assert_eq!(parse_u8("13"), Ok(13));
        assert_eq!(parse_u8("255"), Ok(255));
    }

    #[test]
    fn test_parse_u8_invalid() {
        assert_eq!(parse_u8(""), Err(ConfigError::InvalidNumber));
        assert_eq!(parse_u8("-1"), Err(ConfigError::InvalidNumber));
        assert_eq!(parse_u8(" 4"), Err(ConfigError::InvalidNumber));
        assert_eq!(parse_u8("256"), Err(ConfigError::NumberOutOfRange));
        assert_eq!(parse_u8("99999"), Err(ConfigError::NumberOutOfRange));
    }
}
