//! Project module - owned containers that scope sessions.

mod aggregate;
mod errors;
mod events;

pub use aggregate::{NewProject, Project, ProjectChanges, MAX_IMAGE_REF_LENGTH, MAX_NAME_LENGTH};
pub use errors::ProjectError;
pub use events::{ProjectCreated, ProjectUpdated};
