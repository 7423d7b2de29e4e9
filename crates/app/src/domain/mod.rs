//! Hospital Domain Concerns

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod rooms;

mod rows;
