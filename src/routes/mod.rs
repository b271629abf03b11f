pub mod activities;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod exams;
pub mod faculty;
pub mod groups;
pub mod health;
pub mod init;
pub mod labs;
pub mod materials;
pub mod schedule;
pub mod students;
pub mod users;
