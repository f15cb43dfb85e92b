//! Formato de datagrama do painel.
//!
//! O painel escuta datagramas ASCII de linha única:
//!
//! ```text
//! ┌───────────┬─────┬────────────────────┐
//! │ canal     │ ':' │ temperatura (opc.) │
//! └───────────┴─────┴────────────────────┘
//! ```
//!
//! - Canal: inteiro decimal, dígitos ASCII, `-` opcional
//! - Temperatura: renderização padrão de `f32` (`23.5`, `-40`, `100`);
//!   segmento vazio quando ausente (`"7:"`)
//! - Sem prefixo de tamanho, sem checksum, sem versionamento
//!
//! O status da leitura NÃO faz parte do payload: no fio não há como
//! distinguir "indisponível" de "disponível sem valor".

use crate::types::TemperatureReading;
use std::net::{Ipv4Addr, SocketAddr};

/// Endereço loopback do painel local.
pub const PANEL_ADDR: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Porta UDP em que o painel escuta.
pub const PANEL_PORT: u16 = 48620;

/// Endpoint padrão do painel (`127.0.0.1:48620`).
pub fn panel_endpoint() -> SocketAddr {
    SocketAddr::from((PANEL_ADDR, PANEL_PORT))
}

/// Erros de decodificação de datagrama.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Datagrama não é ASCII válido")]
    NotAscii,

    #[error("Separador ':' ausente")]
    MissingSeparator,

    #[error("Canal inválido: {0:?}")]
    InvalidChannel(String),

    #[error("Temperatura inválida: {0:?}")]
    InvalidTemperature(String),
}

/// Codifica uma [`TemperatureReading`] como payload ASCII `canal:temperatura`.
///
/// Temperatura ausente rende o segmento vazio (`"7:"`). O status nunca é
/// incluído, mesmo na combinação `Unavailable` com valor presente.
pub fn encode_reading(reading: &TemperatureReading) -> Vec<u8> {
    let temp = match reading.temp_celsius() {
        Some(t) => t.to_string(),
        None => String::new(),
    };
    format!("{}:{}", reading.channel(), temp).into_bytes()
}

/// O que um receptor consegue recuperar de um datagrama.
///
/// Apenas canal e temperatura — o status não trafega no fio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireReading {
    pub channel: i32,
    pub temp_celsius: Option<f32>,
}

/// Decodifica um datagrama `canal:temperatura` recebido do fio.
///
/// Divide no primeiro `:`; segmento de temperatura vazio vira `None`.
pub fn parse_datagram(data: &[u8]) -> Result<WireReading, WireError> {
    let text = std::str::from_utf8(data).map_err(|_| WireError::NotAscii)?;
    if !text.is_ascii() {
        return Err(WireError::NotAscii);
    }

    let (channel, temp) = text.split_once(':').ok_or(WireError::MissingSeparator)?;

    let channel = channel
        .parse::<i32>()
        .map_err(|_| WireError::InvalidChannel(channel.into()))?;

    let temp_celsius = if temp.is_empty() {
        None
    } else {
        Some(
            temp.parse::<f32>()
                .map_err(|_| WireError::InvalidTemperature(temp.into()))?,
        )
    };

    Ok(WireReading {
        channel,
        temp_celsius,
    })
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
