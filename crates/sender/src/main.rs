//! # Sensoria Sender
//!
//! Lê as temperaturas de hardware do host e notifica o painel local via
//! UDP: um datagrama ASCII `canal:temperatura` por canal, a cada ciclo.
//! O painel é um processo externo escutando na porta 48620 de loopback.
//!
//! ## Uso
//! ```bash
//! sensor_sender                 # destino padrão 127.0.0.1:48620
//! RUST_LOG=debug sensor_sender  # logging detalhado
//! ```

mod monitor;

use monitor::SensorMonitor;
use sensor_core::config::AppConfig;
use sensor_core::transmit::UdpTransmitter;
use sensor_core::types::SensorStatus;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

fn main() {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Carregar config ──
    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path);

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    for err in config.validate() {
        warn!("Config: {err}");
    }

    let interval = Duration::from_secs_f64(config.sender.interval_secs);

    // ── Transmissor UDP ──
    let dest = config
        .panel
        .socket_addr()
        .expect("Endereço de painel inválido");
    let transmitter = UdpTransmitter::with_bind(&config.sender.bind_ip, dest)
        .expect("Falha ao criar socket UDP");

    // ── Sensor Monitor ──
    let mut sensors = SensorMonitor::new();

    // ── Banner ──
    println!();
    println!("══════════════════════════════════════════════");
    println!("   🌡  SENSORIA SENDER – ATIVO (Rust)");
    println!("══════════════════════════════════════════════");
    println!("  Painel:    {dest}");
    println!("  Intervalo: {:.1}s", config.sender.interval_secs);
    println!("══════════════════════════════════════════════");
    println!();

    // ── Loop principal ──
    loop {
        let cycle_start = Instant::now();

        let readings = sensors.collect();
        let mut bytes_sent = 0usize;
        let mut available = 0usize;

        for reading in &readings {
            if reading.status() == SensorStatus::Available {
                available += 1;
            }
            match reading.publish(&transmitter) {
                Ok(sent) => bytes_sent += sent,
                Err(e) => error!("Erro ao enviar canal {}: {e}", reading.channel()),
            }
        }

        info!(
            "→ {} canais ({} disponíveis) | {} bytes para {}",
            readings.len(),
            available,
            bytes_sent,
            dest
        );

        // Dormir pelo tempo restante do intervalo
        let elapsed = cycle_start.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }
}
