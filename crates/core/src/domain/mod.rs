pub mod course;
pub mod enrollment;
