pub mod sea_orm_active_enums;

pub mod activity;
pub mod attendance_record;
pub mod course;
pub mod exam;
pub mod faculty_member;
pub mod group_member;
pub mod lab;
pub mod schedule_assignment;
pub mod student;
pub mod student_group;
pub mod teaching_material;
pub mod user;
