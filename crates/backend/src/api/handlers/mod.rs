pub mod a001_sponsor_store;
pub mod a002_tourism_guide;
pub mod a003_experience_program;
pub mod a004_reservation;
pub mod a005_review;
pub mod meta;
