use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    pois: Pois,
    markers: Markers,
    replay: Replay,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn pois(&self) -> &Pois {
        &self.pois
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    selection_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn selection_buffer_size(&self) -> usize {
        self.selection_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Pois {
    directory: String,
}

impl Pois {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Markers {
    height_m: f32,
}

impl Markers {
    pub fn height_m(&self) -> f32 {
        self.height_m
    }
}

#[derive(Debug, Deserialize)]
pub struct Replay {
    script: String,
}

impl Replay {
    pub fn script(&self) -> &str {
        &self.script
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 1,
                    selection_buffer_size: 1,
                },
                pois: Pois {
                    directory: "pois".to_string(),
                },
                markers: Markers { height_m: 1.5 },
                replay: Replay {
                    script: "replay/walk.json".to_string(),
                },
            },
        }
    }

    pub fn poi_directory(mut self, directory: String) -> Self {
        self.config.pois.directory = directory;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_produces_a_usable_config() {
        let config = AppConfigBuilder::new().poi_directory("test_pois".to_string()).build();

        assert_eq!(config.pois().directory(), "test_pois");
        assert_eq!(config.core().event_buffer_size(), 1);
        assert_eq!(config.core().selection_buffer_size(), 1);
        assert_eq!(config.markers().height_m(), 1.5);
        assert_eq!(config.replay().script(), "replay/walk.json");
    }
}
