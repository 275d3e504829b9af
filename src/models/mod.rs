pub mod attendance;
pub mod date_status;
pub mod envelope;
pub mod fee;
pub mod profile;
pub mod routine;
pub mod staff;
pub mod subject;
