pub mod activity_repository;
pub mod attendance_repository;
pub mod course_repository;
pub mod exam_repository;
pub mod faculty_repository;
pub mod group_repository;
pub mod lab_repository;
pub mod material_repository;
pub mod schedule_repository;
pub mod student_repository;
pub mod user_repository;

pub use activity_repository::{ActivityRepository, ActivityUpdate};
pub use attendance_repository::{AttendanceFilter, AttendanceRepository};
pub use course_repository::{CourseFilter, CourseRepository, CourseUpdate};
pub use exam_repository::{ExamFilter, ExamRepository, ExamUpdate};
pub use faculty_repository::{FacultyRepository, FacultyUpdate};
pub use group_repository::{GroupRepository, GroupUpdate};
pub use lab_repository::{LabFilter, LabRepository, LabUpdate};
pub use material_repository::{MaterialFilter, MaterialRepository, MaterialUpdate};
pub use schedule_repository::{ScheduleFilter, ScheduleRepository};
pub use student_repository::{StudentRepository, StudentUpdate};
pub use user_repository::UserRepository;
