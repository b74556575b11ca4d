use serde::Deserialize;
use tracing::Level;

use crate::{
    error::{Error, Result},
    listener::ListenerOptions,
    view::ViewEvents,
};

/// Options for mounting the demo page. Every field is optional when deserialising.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Id of the element to mount within. Mounts in `<body>` when absent.
    pub root_id: Option<String>,

    pub pointer_event: String,
    pub click_event: String,
    pub pointer_options: ListenerOptions,

    /// Maximum level of log output sent to the console.
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let events = ViewEvents::default();

        Self {
            root_id: None,
            pointer_event: events.pointer,
            click_event: events.click,
            pointer_options: events.pointer_options,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a config from JSON. An absent or blank string results in the default config.
    pub fn from_json(json: Option<&str>) -> Result<Self> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    pub fn view_events(&self) -> ViewEvents {
        ViewEvents {
            pointer: self.pointer_event.clone(),
            click: self.click_event.clone(),
            pointer_options: self.pointer_options,
        }
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| Error::LogLevel(self.log_level.clone()))
    }
}
