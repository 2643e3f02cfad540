pub mod interview;
pub mod jobs;
pub mod learning;
pub mod profile;
pub mod resume;
pub mod roadmap;
