pub mod project;
pub mod serve;

pub use project::{project, ProjectArgs};
pub use serve::serve;
