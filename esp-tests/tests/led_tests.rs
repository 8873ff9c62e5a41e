//! Integration Tests für die WiFi-LED Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedSwitch

use esp_core::{
    ApNetwork, ApSecurity, ConfigError, LedController, LedError, LedState, LedStatus, LedSwitch,
    MAX_AP_CONNECTIONS, StationCounter, SwitchCommand, led_page, parse_u8, validate_channel,
    validate_max_connections, validate_ssid,
};

// ============================================================================
// Mock LED Switch
// ============================================================================

#[derive(Default)]
pub struct MockLedSwitch {
    pub level: Option<bool>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedSwitch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedSwitch for MockLedSwitch {
    fn set_level(&mut self, on: bool) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.level = Some(on);
        self.write_count += 1;
        Ok(())
    }
}

fn controller() -> LedController<MockLedSwitch> {
    LedController::new(MockLedSwitch::new()).unwrap()
}

// ============================================================================
// Tests: LedController
// ============================================================================

#[test]
fn test_controller_starts_off() {
    let led = controller();
    assert_eq!(led.state(), LedState::Off);
    assert_eq!(led.switch().level, Some(false));
    assert_eq!(led.switch().write_count, 1);
}

#[test]
fn test_controller_turn_on_and_off() {
    let mut led = controller();

    assert_eq!(led.apply(SwitchCommand::TurnOn), Ok(LedState::On));
    assert_eq!(led.state(), LedState::On);
    assert_eq!(led.switch().level, Some(true));

    assert_eq!(led.apply(SwitchCommand::TurnOff), Ok(LedState::Off));
    assert_eq!(led.state(), LedState::Off);
    assert_eq!(led.switch().level, Some(false));
}

#[test]
fn test_controller_repeated_command_is_idempotent() {
    let mut led = controller();
    led.apply(SwitchCommand::TurnOn).unwrap();
    led.apply(SwitchCommand::TurnOn).unwrap();

    assert_eq!(led.state(), LedState::On);
    // Pin wird bei jedem Kommando geschrieben, auch ohne Zustandswechsel
    assert_eq!(led.switch().write_count, 3);
}

#[test]
fn test_controller_init_fails_when_pin_fails() {
    let mut switch = MockLedSwitch::new();
    switch.fail_next_write = true;

    let result = LedController::new(switch);
    assert!(result.is_err());
}

#[test]
fn test_controller_failed_apply_does_not_change_state() {
    struct BrokenAfterInit {
        writes: usize,
    }

    impl LedSwitch for BrokenAfterInit {
        fn set_level(&mut self, _on: bool) -> Result<(), LedError> {
            self.writes += 1;
            if self.writes > 1 {
                Err(LedError::WriteFailed)
            } else {
                Ok(())
            }
        }
    }

    let mut led = LedController::new(BrokenAfterInit { writes: 0 }).unwrap();
    assert_eq!(
        led.apply(SwitchCommand::TurnOn),
        Err(LedError::WriteFailed)
    );
    assert_eq!(led.state(), LedState::Off);
}

// ============================================================================
// Tests: Routing + Seite
// ============================================================================

#[test]
fn test_request_path_drives_page() {
    use core::convert::TryFrom;

    let mut led = controller();

    let cmd = SwitchCommand::try_from("/on").unwrap();
    let state = led.apply(cmd).unwrap();
    assert!(led_page(state).contains("LED State: ON"));

    let cmd = SwitchCommand::try_from("/off").unwrap();
    let state = led.apply(cmd).unwrap();
    assert!(led_page(state).contains("LED State: OFF"));
}

#[test]
fn test_unknown_path_is_rejected() {
    use core::convert::TryFrom;
    assert!(SwitchCommand::try_from("/toggle").is_err());
    assert!(SwitchCommand::try_from("").is_err());
}

#[test]
fn test_page_is_identical_for_root_and_switch() {
    // GET / zeigt für denselben Zustand exakt dieselbe Seite wie /on bzw. /off
    let mut led = controller();
    let after_on = led_page(led.apply(SwitchCommand::TurnOn).unwrap());
    assert_eq!(led_page(led.state()), after_on);
}

#[test]
fn test_status_json() {
    let mut buf = [0u8; 32];

    let n = serde_json_core::to_slice(&LedStatus::from(LedState::On), &mut buf).unwrap();
    assert_eq!(core::str::from_utf8(&buf[..n]).unwrap(), r#"{"led":"on"}"#);

    let n = serde_json_core::to_slice(&LedStatus::from(LedState::Off), &mut buf).unwrap();
    assert_eq!(core::str::from_utf8(&buf[..n]).unwrap(), r#"{"led":"off"}"#);
}

// ============================================================================
// Tests: Access Point Konfiguration
// ============================================================================

#[test]
fn test_ap_security() {
    assert_eq!(ApSecurity::for_password(""), Ok(ApSecurity::Open));
    assert_eq!(
        ApSecurity::for_password("12345678"),
        Ok(ApSecurity::WpaWpa2Personal)
    );
    assert_eq!(
        ApSecurity::for_password("1234567"),
        Err(ConfigError::InvalidPasswordLength)
    );
    let too_long = "x".repeat(64);
    assert_eq!(
        ApSecurity::for_password(&too_long),
        Err(ConfigError::InvalidPasswordLength)
    );
}

#[test]
fn test_channel_validation() {
    assert_eq!(parse_u8("1").and_then(validate_channel), Ok(1));
    assert_eq!(parse_u8("13").and_then(validate_channel), Ok(13));
    assert_eq!(
        parse_u8("0").and_then(validate_channel),
        Err(ConfigError::InvalidChannel)
    );
    assert_eq!(
        parse_u8("14").and_then(validate_channel),
        Err(ConfigError::InvalidChannel)
    );
}

#[test]
fn test_ssid_validation() {
    assert_eq!(validate_ssid("esp32c6-led"), Ok("esp32c6-led"));
    assert_eq!(validate_ssid(""), Err(ConfigError::InvalidSsidLength));

    let max = "s".repeat(32);
    assert_eq!(validate_ssid(&max), Ok(max.as_str()));
    let too_long = "s".repeat(33);
    assert_eq!(validate_ssid(&too_long), Err(ConfigError::InvalidSsidLength));
}

#[test]
fn test_max_connections_validation() {
    assert_eq!(parse_u8("1").and_then(validate_max_connections), Ok(1));
    assert_eq!(
        parse_u8("10").and_then(validate_max_connections),
        Ok(MAX_AP_CONNECTIONS)
    );
    assert_eq!(
        parse_u8("0").and_then(validate_max_connections),
        Err(ConfigError::InvalidMaxConnections)
    );
    assert_eq!(
        parse_u8("11").and_then(validate_max_connections),
        Err(ConfigError::InvalidMaxConnections)
    );
    assert_eq!(
        parse_u8("255").and_then(validate_max_connections),
        Err(ConfigError::InvalidMaxConnections)
    );
}

#[test]
fn test_ap_network_defaults() {
    let net = ApNetwork::DEFAULT;
    assert_eq!(net.address.octets(), [192, 168, 1, 1]);
    assert_eq!(net.gateway, net.address);
    assert_eq!(net.prefix_len, 24);
    assert_eq!(net.netmask().octets(), [255, 255, 255, 0]);
}

#[test]
fn test_netmask_with_oversized_prefix() {
    let net = ApNetwork {
        prefix_len: 33,
        ..ApNetwork::DEFAULT
    };
    assert_eq!(net.netmask().octets(), [255, 255, 255, 255]);
}

#[test]
fn test_station_counter() {
    let mut stations = StationCounter::new();
    stations.joined();
    stations.joined();
    stations.left();
    assert_eq!(stations.connected(), 1);
    stations.left();
    stations.left();
    assert_eq!(stations.connected(), 0);
}
