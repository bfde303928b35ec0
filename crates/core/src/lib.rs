pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod lms;
pub mod recommend;
pub mod responses;

pub use catalog::Catalog;
pub use domain::course::{CourseDefinition, ExperienceLevel, Material, Topic};
pub use domain::enrollment::{EnrollmentRecord, EnrollmentStatus};
pub use errors::{ApplicationError, BackendError};
pub use ledger::EnrollmentLedger;
pub use lms::{CourseId, LmsBackend, LmsCourse, NoopLms};
pub use recommend::{Intent, RecommendationEngine, Response, Slots};
