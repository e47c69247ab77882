use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::Path,
};
use tracing::{error, info};

use crate::core::error::{CatalogError, Result};

pub const SETTINGS_PATH: &str = "core/settings.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
    pub catalog_path: OptStrSetting,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OptStrSetting {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No settings at {}, using defaults", path.display());
                return Ok(Settings::new());
            }
            Err(err) => {
                error!("Settings load error: {}", err);
                return Err(err.into());
            }
        };

        let mut buffer = Vec::new();
        BufReader::new(file).read_to_end(&mut buffer)?;
        serde_json::from_slice::<Settings>(&buffer).map_err(|err| {
            error!("Settings load error: {}", err);
            CatalogError::Settings {
                message: format!("{}: {}", path.display(), err),
            }
        })
    }

    pub fn new() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(127, 0, 0, 1),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4010,
            },
            catalog_path: OptStrSetting {
                name: "catalog_path".to_string(),
                value: None,
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ipv4_addr.value, self.port.value))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::new());
        assert_eq!(settings.addr().to_string(), "127.0.0.1:4010");
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "ipv4_addr": { "name": "Ipv4 Address", "value": "0.0.0.0" },
                "port": { "name": "Port", "value": 1234 },
                "catalog_path": { "name": "catalog_path", "value": "data/projects.json" }
            }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.addr().to_string(), "0.0.0.0:1234");
        assert_eq!(
            settings.catalog_path.value.as_deref(),
            Some("data/projects.json")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(CatalogError::Settings { .. })
        ));
    }
}
