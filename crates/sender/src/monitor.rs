//! Monitor de sensores – enumera os componentes térmicos do host via sysinfo.
//!
//! Cada componente térmico reportado pelo sistema vira um canal, numerado
//! sequencialmente a partir de 0 na ordem de enumeração. A lista é enumerada
//! uma vez na criação do monitor; a cada ciclo apenas os valores são
//! atualizados, então a numeração dos canais é estável.

use sensor_core::types::{SensorStatus, TemperatureReading};
use sysinfo::Components;
use tracing::{debug, info};

/// Monitor dos canais de temperatura do host.
pub struct SensorMonitor {
    components: Components,
}

impl SensorMonitor {
    /// Cria um novo monitor e enumera os componentes disponíveis.
    pub fn new() -> Self {
        let components = Components::new_with_refreshed_list();

        info!(
            "{} canais de temperatura detectados",
            components.list().len()
        );
        for (channel, comp) in components.iter().enumerate() {
            info!("  Canal {channel}: {}", comp.label());
        }

        Self { components }
    }

    /// Atualiza todos os canais e retorna uma leitura por canal.
    ///
    /// Componente sem valor neste ciclo vira leitura `Unavailable` sem
    /// temperatura; o datagrama correspondente ainda é publicado.
    pub fn collect(&mut self) -> Vec<TemperatureReading> {
        self.components.refresh(true);

        self.components
            .iter()
            .enumerate()
            .map(|(channel, comp)| match comp.temperature() {
                Some(t) => {
                    TemperatureReading::new(channel as i32, SensorStatus::Available, Some(t))
                }
                None => {
                    debug!("Canal {channel} ({}) sem leitura neste ciclo", comp.label());
                    TemperatureReading::new(channel as i32, SensorStatus::Unavailable, None)
                }
            })
            .collect()
    }
}
