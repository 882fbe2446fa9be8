use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

pub const DEFAULT_CONFIG_ID: &str = "default";

/// UI preferences persisted between sessions. Contacts themselves are
/// never written to disk.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub id: String,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONFIG_ID.to_string(),
            theme: Theme::Blue.to_string(),
        }
    }
}

pub struct ConfigManager {
    path: String,
    configs: HashMap<String, Config>,
}

impl ConfigManager {
    pub fn new(path: &str) -> Self {
        let f: Result<std::fs::File, std::io::Error> = std::fs::File::open(path);

        match f {
            Ok(file) => {
                let configs: HashMap<String, Config> = serde_yaml::from_reader(file).unwrap();
                Self {
                    path: String::from(path),
                    configs,
                }
            }
            Err(_) => {
                let default_conf = Config::default();
                let mut configs: HashMap<String, Config> = HashMap::new();
                configs.insert(default_conf.id.clone(), default_conf);
                let mut man = Self {
                    path: String::from(path),
                    configs,
                };
                man.write();
                man
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<Config> {
        self.configs.get(id).cloned()
    }

    pub fn create(&mut self, config: &Config) {
        self.configs.insert(config.id.clone(), config.clone());
        self.write();
    }

    pub fn update_theme(&mut self, id: &str, theme: &Theme) {
        if let Some(conf) = self.configs.get_mut(id) {
            conf.theme = theme.to_string();
            self.write();
        }
    }

    fn write(&mut self) {
        let serialized = serde_yaml::to_string(&self.configs).unwrap();
        std::fs::write(&self.path, serialized).unwrap();
    }
}
