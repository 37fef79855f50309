pub mod course;
pub mod error;
pub mod graph;
pub mod scheduler;
pub mod serialize;

pub use course::{Catalog, Course};
pub use error::PlanError;
pub use scheduler::Scheduler;
