//! Game Module
//!
//! Contains showcase-specific systems that build on top of the engine:
//! project data, floating markers, scene wiring, and host input bindings.

pub mod config;
pub mod markers;
pub mod projects;
pub mod scene;

pub use config::InputConfig;
pub use markers::{MARKER_BASE_SCALE, MARKER_HOVER_SCALE, MARKER_SPIN_SPEED, ProjectMarker};
pub use projects::{
    Project, ProjectDataError, ProjectLinks, builtin_projects, load_projects,
    load_projects_or_builtin,
};
pub use scene::ShowcaseScene;
