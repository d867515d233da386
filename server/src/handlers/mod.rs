pub mod activity;
pub mod enrollment;
