//! Tipos de leitura de sensor de temperatura.
//!
//! A leitura é um value object imutável: construção pura, sem validação e
//! sem I/O. A publicação para o painel é uma operação separada em
//! [`crate::transmit`].

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Status
// ──────────────────────────────────────────────

/// Status de um canal de sensor de temperatura.
///
/// O dispositivo reporta o status como um byte (`0x00`/`0x01`). O status
/// nunca é transmitido no datagrama — existe apenas na leitura local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SensorStatus {
    /// Sensor produziu uma leitura válida.
    Available = 0x00,
    /// Sensor presente mas sem valor no momento.
    Unavailable = 0x01,
}

// ──────────────────────────────────────────────
// Leitura
// ──────────────────────────────────────────────

/// Uma leitura de um canal de sensor de temperatura.
///
/// Os três campos são fixados na construção. Temperatura ausente é válida
/// para qualquer status — o hardware não garante correlação entre os dois,
/// e nenhuma é imposta aqui.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    channel: i32,
    status: SensorStatus,
    temp_celsius: Option<f32>,
}

impl TemperatureReading {
    /// Cria uma nova leitura.
    ///
    /// Aceita qualquer combinação de entradas verbatim: canal negativo,
    /// NaN, infinito, status sem valor ou valor sem status disponível.
    pub fn new(channel: i32, status: SensorStatus, temp_celsius: Option<f32>) -> Self {
        Self {
            channel,
            status,
            temp_celsius,
        }
    }

    /// Canal físico do sensor no dispositivo.
    pub fn channel(&self) -> i32 {
        self.channel
    }

    /// Status reportado pelo dispositivo.
    pub fn status(&self) -> SensorStatus {
        self.status
    }

    /// Temperatura em °C, se houver leitura.
    pub fn temp_celsius(&self) -> Option<f32> {
        self.temp_celsius
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_inputs_unmodified() {
        let r = TemperatureReading::new(3, SensorStatus::Available, Some(23.5));
        assert_eq!(r.channel(), 3);
        assert_eq!(r.status(), SensorStatus::Available);
        assert_eq!(r.temp_celsius(), Some(23.5));
    }

    #[test]
    fn negative_channel_accepted() {
        let r = TemperatureReading::new(-12, SensorStatus::Unavailable, None);
        assert_eq!(r.channel(), -12);
        assert_eq!(r.temp_celsius(), None);
    }

    #[test]
    fn nan_temperature_preserved() {
        let r = TemperatureReading::new(0, SensorStatus::Available, Some(f32::NAN));
        assert!(r.temp_celsius().unwrap().is_nan());
    }

    #[test]
    fn mismatched_status_and_value_representable() {
        // O hardware pode reportar valor com status Unavailable; nada é corrigido
        let r = TemperatureReading::new(5, SensorStatus::Unavailable, Some(40.0));
        assert_eq!(r.status(), SensorStatus::Unavailable);
        assert_eq!(r.temp_celsius(), Some(40.0));
    }

    #[test]
    fn status_byte_values_match_device() {
        assert_eq!(SensorStatus::Available as u8, 0x00);
        assert_eq!(SensorStatus::Unavailable as u8, 0x01);
    }
}
