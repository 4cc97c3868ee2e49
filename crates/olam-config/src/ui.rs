use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which kind of UI surface hosts the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Toolbar popup, filter buttons select
    Popup,
    /// In-page overlay, clicking the active filter clears it
    #[default]
    Overlay,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Popup => f.write_str("popup"),
            SurfaceKind::Overlay => f.write_str("overlay"),
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popup" => Ok(SurfaceKind::Popup),
            "overlay" => Ok(SurfaceKind::Overlay),
            other => Err(format!("unknown surface: {other}")),
        }
    }
}

fn default_show_details_link() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub surface: SurfaceKind,
    #[serde(default = "default_show_details_link")]
    pub show_details_link: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let surface = env::var("OLAM_SURFACE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            surface,
            show_details_link: default_show_details_link(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceKind::default(),
            show_details_link: default_show_details_link(),
        }
    }
}
