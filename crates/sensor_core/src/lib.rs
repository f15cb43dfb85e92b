//! # Sensor Core
//!
//! Crate compartilhada que define a leitura de sensor de temperatura, o
//! formato de datagrama ASCII `canal:temperatura`, a publicação UDP
//! fire-and-forget para o painel local e a configuração TOML do sistema
//! Sensoria.
//!
//! ## Módulos
//! - [`types`] – Leitura imutável (canal, status, temperatura)
//! - [`wire`] – Codificação/decodificação ASCII do datagrama
//! - [`transmit`] – Capability de envio e transmissor UDP real
//! - [`config`] – Configuração unificada via TOML

pub mod types;
pub mod wire;
pub mod transmit;
pub mod config;

// Re-exports convenientes
pub use types::{SensorStatus, TemperatureReading};
pub use wire::{PANEL_ADDR, PANEL_PORT, encode_reading, panel_endpoint, parse_datagram};
pub use transmit::{Transmit, TransmitError, UdpTransmitter};
pub use config::{AppConfig, PanelConfig, SenderConfig};
