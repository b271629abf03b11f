use utoipa::OpenApi;

use crate::entities::sea_orm_active_enums::{AttendanceStatus, RoleEnum};
use crate::routes;
use crate::routes::common::{
    ActivityRef, AssignmentRow, CourseRef, FacultyRef, GroupRef, MessageResponse, StudentRef,
    SuccessResponse, UserRef,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acadesk API",
        description = "Administrative records for faculty, courses, students, and activities"
    ),
    paths(
        routes::health::route::health,
        routes::init::route::init_admin,
        routes::users::route::register_user,
        routes::auth::route::login,
        routes::auth::route::logout,
        routes::auth::route::change_password,
        routes::faculty::route::get_all_faculty,
        routes::faculty::route::create_faculty,
        routes::faculty::route::get_faculty,
        routes::faculty::route::update_faculty,
        routes::faculty::route::delete_faculty,
        routes::courses::route::get_all_courses,
        routes::courses::route::create_course,
        routes::courses::route::get_course,
        routes::courses::route::update_course,
        routes::courses::route::delete_course,
        routes::students::route::get_all_students,
        routes::students::route::create_student,
        routes::students::route::get_student,
        routes::students::route::update_student,
        routes::students::route::delete_student,
        routes::groups::route::get_all_groups,
        routes::groups::route::create_group,
        routes::groups::route::get_group,
        routes::groups::route::update_group,
        routes::groups::route::delete_group,
        routes::activities::route::get_all_activities,
        routes::activities::route::create_activity,
        routes::activities::route::get_activity,
        routes::activities::route::update_activity,
        routes::activities::route::delete_activity,
        routes::attendance::route::get_all_attendance,
        routes::attendance::route::record_attendance,
        routes::attendance::route::update_attendance,
        routes::attendance::route::delete_attendance,
        routes::labs::route::get_all_labs,
        routes::labs::route::create_lab,
        routes::labs::route::get_lab,
        routes::labs::route::update_lab,
        routes::labs::route::delete_lab,
        routes::exams::route::get_all_exams,
        routes::exams::route::create_exam,
        routes::exams::route::get_exam,
        routes::exams::route::update_exam,
        routes::exams::route::delete_exam,
        routes::materials::route::get_all_materials,
        routes::materials::route::create_material,
        routes::materials::route::get_material,
        routes::materials::route::update_material,
        routes::materials::route::delete_material,
        routes::schedule::route::get_all_assignments,
        routes::schedule::route::create_assignment,
        routes::schedule::route::delete_assignment,
    ),
    components(schemas(
        RoleEnum,
        AttendanceStatus,
        MessageResponse,
        SuccessResponse,
        UserRef,
        CourseRef,
        GroupRef,
        StudentRef,
        ActivityRef,
        FacultyRef,
        AssignmentRow,
        routes::init::dto::InitRequest,
        routes::init::dto::InitResponse,
        routes::users::dto::RegisterUserRequest,
        routes::users::dto::UserResponse,
        routes::auth::dto::LoginRequest,
        routes::auth::dto::ChangePasswordRequest,
        routes::auth::dto::ChangePasswordResponse,
        routes::faculty::dto::CreateFacultyRequest,
        routes::faculty::dto::UpdateFacultyRequest,
        routes::faculty::dto::FacultyResponse,
        routes::courses::dto::CreateCourseRequest,
        routes::courses::dto::UpdateCourseRequest,
        routes::courses::dto::CourseResponse,
        routes::students::dto::CreateStudentRequest,
        routes::students::dto::UpdateStudentRequest,
        routes::students::dto::StudentResponse,
        routes::groups::dto::CreateGroupRequest,
        routes::groups::dto::UpdateGroupRequest,
        routes::groups::dto::GroupMemberRow,
        routes::groups::dto::GroupResponse,
        routes::activities::dto::CreateActivityRequest,
        routes::activities::dto::UpdateActivityRequest,
        routes::activities::dto::ActivityAttendanceRow,
        routes::activities::dto::ActivityResponse,
        routes::attendance::dto::RecordAttendanceRequest,
        routes::attendance::dto::UpdateAttendanceRequest,
        routes::attendance::dto::AttendanceResponse,
        routes::labs::dto::CreateLabRequest,
        routes::labs::dto::UpdateLabRequest,
        routes::labs::dto::LabResponse,
        routes::exams::dto::CreateExamRequest,
        routes::exams::dto::UpdateExamRequest,
        routes::exams::dto::ExamResponse,
        routes::materials::dto::CreateMaterialRequest,
        routes::materials::dto::UpdateMaterialRequest,
        routes::materials::dto::MaterialResponse,
        routes::schedule::dto::CreateScheduleRequest,
        routes::schedule::dto::ScheduleResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Init", description = "First-run admin bootstrap"),
        (name = "Auth", description = "Session login and password management"),
        (name = "Users", description = "Account registration"),
        (name = "Faculty", description = "Faculty member records"),
        (name = "Courses", description = "Course catalog"),
        (name = "Students", description = "Student records"),
        (name = "Groups", description = "Student groups and membership"),
        (name = "Activities", description = "Scheduled activities"),
        (name = "Attendance", description = "Attendance records keyed by student and activity"),
        (name = "Labs", description = "Weekly lab sessions"),
        (name = "Exams", description = "Exam sessions"),
        (name = "Materials", description = "Teaching materials"),
        (name = "Schedule", description = "Faculty course assignments per academic year"),
    )
)]
pub struct ApiDoc;
