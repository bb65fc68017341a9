//! Portfolio project data
//!
//! The records behind the floating markers: title, description, tech tags,
//! external links, and the world position the marker floats at. Loaded from
//! a JSON file (`data/projects.json`) with a builtin sample set as fallback.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// External links attached to a project.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectLinks {
    /// Repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Live deployment URL
    #[serde(default, rename = "liveDemo", skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
}

/// One portfolio entry displayed as a floating marker in the scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique slug (e.g. "project-1-chat-app")
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description for the detail panel
    pub description: String,
    /// Tech stack tags
    pub tags: Vec<String>,
    /// External links
    #[serde(default)]
    pub links: ProjectLinks,
    /// World position of the marker, `[x, y, z]`
    pub position: [f32; 3],
    /// Model file used for the marker (e.g. "globe.glb")
    pub model: String,
}

impl Project {
    /// Marker position as a vector.
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Errors that can occur while loading project data.
#[derive(Debug)]
pub enum ProjectDataError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ProjectDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectDataError::IoError(e) => write!(f, "IO error: {e}"),
            ProjectDataError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ProjectDataError {}

impl From<std::io::Error> for ProjectDataError {
    fn from(e: std::io::Error) -> Self {
        ProjectDataError::IoError(e)
    }
}

impl From<serde_json::Error> for ProjectDataError {
    fn from(e: serde_json::Error) -> Self {
        ProjectDataError::JsonError(e)
    }
}

/// Loads project records from a JSON file.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, ProjectDataError> {
    let bytes = std::fs::read(path)?;
    let projects = serde_json::from_slice(&bytes)?;
    Ok(projects)
}

/// Loads project records from a file, falling back to the builtin sample set
/// on any error (logged, non-fatal).
pub fn load_projects_or_builtin(path: &Path) -> Vec<Project> {
    match load_projects(path) {
        Ok(projects) => projects,
        Err(e) => {
            println!(
                "[Projects] Failed to load {}: {} - using builtin set",
                path.display(),
                e
            );
            builtin_projects()
        }
    }
}

/// The builtin sample portfolio, mirroring the shipped data file.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1-chat-app".to_string(),
            title: "Realtime Chat App".to_string(),
            description: "High-throughput realtime chat platform built on React and Socket.io."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "Socket.io".to_string(),
                "Node.js".to_string(),
            ],
            links: ProjectLinks {
                github: Some("https://github.com/your/chat-app".to_string()),
                live_demo: Some("https://demo.chat-app.com".to_string()),
            },
            position: [-3.0, 0.5, 3.0],
            model: "chat-bubble.glb".to_string(),
        },
        Project {
            id: "project-2-3d-viz".to_string(),
            title: "WebGL Data Visualization".to_string(),
            description: "Large-scale data visualization dashboard rendered with Three.js."
                .to_string(),
            tags: vec![
                "Three.js".to_string(),
                "D3.js".to_string(),
                "WebGL".to_string(),
            ],
            links: ProjectLinks {
                github: Some("https://github.com/your/3d-viz".to_string()),
                live_demo: None,
            },
            position: [3.0, 0.5, 3.0],
            model: "globe.glb".to_string(),
        },
        Project {
            id: "project-3-e-commerce".to_string(),
            title: "Modern E-commerce Platform".to_string(),
            description: "Microservice e-commerce storefront built with Vue and Next.js."
                .to_string(),
            tags: vec![
                "Vue.js".to_string(),
                "Next.js".to_string(),
                "PostgreSQL".to_string(),
            ],
            links: ProjectLinks {
                github: Some("https://github.com/your/ecommerce".to_string()),
                live_demo: None,
            },
            position: [0.0, 0.5, -4.0],
            model: "shop-cart.glb".to_string(),
        },
    ]
}
