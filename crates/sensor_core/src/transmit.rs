//! Publicação fire-and-forget de leituras via UDP.
//!
//! O envio é uma capability injetável ([`Transmit`]); o transmissor real é
//! [`UdpTransmitter`]. Sem retry, sem confirmação, sem framing: uma leitura
//! vira exatamente um datagrama.

use crate::types::TemperatureReading;
use crate::wire::{encode_reading, panel_endpoint};
use std::net::{SocketAddr, UdpSocket};
use tracing::debug;

/// Erros de transmissão.
#[derive(Debug, thiserror::Error)]
pub enum TransmitError {
    #[error("Falha ao criar socket UDP: {0}")]
    Setup(#[source] std::io::Error),

    #[error("Falha ao enviar datagrama: {0}")]
    Send(#[source] std::io::Error),
}

/// Capability de envio de um frame como um único datagrama.
pub trait Transmit {
    /// Envia o frame e retorna a quantidade de bytes enviados.
    fn send(&self, frame: &[u8]) -> Result<usize, TransmitError>;
}

/// Transmissor UDP real.
///
/// Um socket efêmero por transmissor, reutilizado entre envios. O envio é
/// bloqueante, sem timeout explícito; erros do OS propagam ao chamador.
pub struct UdpTransmitter {
    sock: UdpSocket,
    dest: SocketAddr,
}

impl UdpTransmitter {
    /// Cria um transmissor para o destino dado, com bind em qualquer
    /// interface local.
    pub fn new(dest: SocketAddr) -> Result<Self, TransmitError> {
        Self::with_bind("", dest)
    }

    /// Cria um transmissor com bind explícito (vazio = qualquer interface).
    pub fn with_bind(bind_ip: &str, dest: SocketAddr) -> Result<Self, TransmitError> {
        let bind_addr = if bind_ip.is_empty() {
            "0.0.0.0:0".to_string()
        } else {
            format!("{bind_ip}:0")
        };
        let sock = UdpSocket::bind(bind_addr).map_err(TransmitError::Setup)?;
        Ok(Self { sock, dest })
    }

    /// Transmissor para o painel local padrão (`127.0.0.1:48620`).
    pub fn panel_default() -> Result<Self, TransmitError> {
        Self::new(panel_endpoint())
    }

    /// Destino configurado deste transmissor.
    pub fn dest(&self) -> SocketAddr {
        self.dest
    }
}

impl Transmit for UdpTransmitter {
    fn send(&self, frame: &[u8]) -> Result<usize, TransmitError> {
        let sent = self
            .sock
            .send_to(frame, self.dest)
            .map_err(TransmitError::Send)?;
        debug!("→ {sent} bytes para {}", self.dest);
        Ok(sent)
    }
}

impl TemperatureReading {
    /// Codifica e publica esta leitura como um único datagrama.
    ///
    /// Falha de envio propaga imediatamente; nenhuma recuperação local é
    /// tentada. Perda de datagrama no trajeto é silenciosa (UDP).
    pub fn publish(&self, tx: &impl Transmit) -> Result<usize, TransmitError> {
        tx.send(&encode_reading(self))
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
