// Task-Modul: Enthält alle Embassy Tasks der drei Demos
//
// wifi_led:   access_point_task, net_task, dhcp_server_task, http_server_task, mdns_responder_task
// ledc_color: color_cycle_task
// spi_matrix: matrix_scan_task

pub mod color_cycle;
pub mod dhcp;
pub mod http;
pub mod matrix_scan;
pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use color_cycle::{color_cycle_logic, color_cycle_task};
pub use dhcp::dhcp_server_task;
pub use http::http_server_task;
pub use matrix_scan::{matrix_scan_logic, matrix_scan_task};
pub use mdns::mdns_responder_task;
pub use wifi::{access_point_task, net_task};
