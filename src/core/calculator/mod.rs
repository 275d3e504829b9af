pub mod calendar;
pub mod fees;
pub mod schedule;
pub mod status;
pub mod subjects;
pub mod summary;
pub mod teachers;
