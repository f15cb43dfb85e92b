//! Configuração unificada via TOML.
//!
//! Um único `config.toml` ao lado do executável. Todos os campos têm
//! default, então um arquivo parcial é válido.

use crate::wire::{PANEL_ADDR, PANEL_PORT};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuração do Sender (loop de coleta).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Intervalo de coleta em segundos
    pub interval_secs: f64,
    /// IP local para bind (vazio = auto)
    pub bind_ip: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1.0,
            bind_ip: String::new(),
        }
    }
}

/// Destino do painel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// IP do painel
    pub ip: String,
    /// Porta UDP do painel
    pub port: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            ip: PANEL_ADDR.to_string(),
            port: PANEL_PORT,
        }
    }
}

impl PanelConfig {
    /// Endpoint configurado do painel.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.ip, self.port)
            .parse()
            .map_err(|e| format!("Endereço de painel inválido {}:{} ({e})", self.ip, self.port))
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sender: SenderConfig,
    pub panel: PanelConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.panel.port == 0 {
            errors.push("Porta do painel não pode ser 0".into());
        }
        if let Err(e) = self.panel.socket_addr() {
            errors.push(e);
        }
        if self.sender.interval_secs < 0.1 || self.sender.interval_secs > 60.0 {
            errors.push(format!(
                "Intervalo do sender inválido: {} (0.1–60.0)",
                self.sender.interval_secs
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        let errors = config.validate();
        assert!(errors.is_empty(), "Erros: {:?}", errors);
    }

    #[test]
    fn default_panel_is_loopback_48620() {
        let config = AppConfig::default();
        let addr = config.panel.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:48620");
    }

    #[test]
    fn roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.panel.port, parsed.panel.port);
        assert_eq!(config.sender.interval_secs, parsed.sender.interval_secs);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let partial = r#"
[panel]
port = 9999
"#;
        let config: AppConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.panel.port, 9999);
        // Outros campos devem ter valor padrão
        assert_eq!(config.panel.ip, "127.0.0.1");
        assert_eq!(config.sender.interval_secs, 1.0);
    }

    #[test]
    fn bad_panel_address_is_reported() {
        let config = AppConfig {
            panel: PanelConfig {
                ip: "painel.local".into(),
                port: PANEL_PORT,
            },
            ..Default::default()
        };
        assert!(!config.validate().is_empty());
    }
}
