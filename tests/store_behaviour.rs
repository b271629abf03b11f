mod common;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use acadesk::entities::group_member;
use acadesk::entities::sea_orm_active_enums::AttendanceStatus;
use acadesk::repositories::{
    ActivityRepository, AttendanceFilter, AttendanceRepository, CourseFilter, CourseRepository,
    GroupRepository, ScheduleRepository, StudentRepository,
};
use acadesk::static_service::DATABASE_CONNECTION;

async fn seed_course(code: &str, year: &str, semester: i32) -> Uuid {
    CourseRepository::new()
        .create(
            Uuid::new_v4(),
            code.to_string(),
            format!("Course {code}"),
            3,
            year.to_string(),
            semester,
            None,
            None,
        )
        .await
        .expect("create course")
        .id
}

async fn seed_student(number: &str) -> Uuid {
    StudentRepository::new()
        .create(
            Uuid::new_v4(),
            format!("Student {number}"),
            number.to_string(),
            None,
            None,
            "2025".to_string(),
            1,
            None,
            None,
            None,
            None,
        )
        .await
        .expect("create student")
        .id
}

async fn seed_activity(title: &str) -> Uuid {
    ActivityRepository::new()
        .create(
            Uuid::new_v4(),
            title.to_string(),
            None,
            "seminar".to_string(),
            None,
            None,
            Utc::now().naive_utc(),
            None,
            None,
            None,
            None,
            None,
        )
        .await
        .expect("create activity")
        .id
}

#[test]
fn courses_list_in_year_semester_code_order() {
    common::run(|| async {
        // Deliberately inserted out of order
        seed_course("ZZZ901", "1991", 1).await;
        seed_course("BBB902", "1990", 2).await;
        seed_course("AAA903", "1990", 1).await;
        seed_course("CCC904", "1990", 1).await;

        let course_repo = CourseRepository::new();
        let all = course_repo
            .find_all(CourseFilter::default())
            .await
            .expect("list courses");
        let seeded: Vec<&str> = all
            .iter()
            .filter(|c| c.year == "1990" || c.year == "1991")
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(seeded, ["AAA903", "CCC904", "BBB902", "ZZZ901"]);

        let filtered = course_repo
            .find_all(CourseFilter {
                year: Some("1990".to_string()),
                semester: None,
            })
            .await
            .expect("list courses");
        let codes: Vec<&str> = filtered.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["AAA903", "CCC904", "BBB902"]);

        let filtered = course_repo
            .find_all(CourseFilter {
                year: Some("1990".to_string()),
                semester: Some(1),
            })
            .await
            .expect("list courses");
        assert_eq!(filtered.len(), 2);
    });
}

#[test]
fn attendance_upsert_reports_creation_and_keeps_one_row() {
    common::run(|| async {
        let student_id = seed_student("STORE-0001").await;
        let activity_id = seed_activity("Store Upsert Seminar").await;

        let attendance_repo = AttendanceRepository::new();
        let (first, created) = attendance_repo
            .upsert(student_id, activity_id, AttendanceStatus::Present, None)
            .await
            .expect("first upsert");
        assert!(created);

        let (second, created) = attendance_repo
            .upsert(
                student_id,
                activity_id,
                AttendanceStatus::Excused,
                Some("sick leave".to_string()),
            )
            .await
            .expect("second upsert");
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.status, AttendanceStatus::Excused);

        let rows = attendance_repo
            .find_all(AttendanceFilter {
                activity_id: Some(activity_id),
                student_id: Some(student_id),
            })
            .await
            .expect("list attendance");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].notes.as_deref(), Some("sick leave"));
    });
}

#[test]
fn course_delete_cascades_schedule_assignments() {
    common::run(|| async {
        let course_id = seed_course("STORE905", "1992", 1).await;
        let faculty = acadesk::repositories::FacultyRepository::new()
            .create(
                Uuid::new_v4(),
                "Dr. Store Cascade".to_string(),
                "Professor".to_string(),
                None,
                None,
            )
            .await
            .expect("create faculty");

        let schedule_repo = ScheduleRepository::new();
        schedule_repo
            .create(
                Uuid::new_v4(),
                faculty.id,
                course_id,
                "1992-1993".to_string(),
                None,
            )
            .await
            .expect("create assignment");

        CourseRepository::new()
            .delete_with_assignments(course_id)
            .await
            .expect("delete course");

        let remaining = schedule_repo
            .find_by_course_ids(vec![course_id])
            .await
            .expect("list assignments");
        assert!(remaining.is_empty());
    });
}

#[test]
fn student_delete_removes_memberships_and_attendance() {
    common::run(|| async {
        let student_id = seed_student("STORE-0002").await;
        let activity_id = seed_activity("Store Cleanup Seminar").await;

        let attendance_repo = AttendanceRepository::new();
        attendance_repo
            .upsert(student_id, activity_id, AttendanceStatus::Late, None)
            .await
            .expect("record attendance");

        let group_repo = GroupRepository::new();
        let group = group_repo
            .create(
                Uuid::new_v4(),
                "Store Cleanup Group".to_string(),
                None,
                None,
                None,
                None,
                None,
                None,
                None,
            )
            .await
            .expect("create group");

        let db = DATABASE_CONNECTION.get().expect("store handle");
        group_member::ActiveModel {
            id: Set(Uuid::new_v4()),
            group_id: Set(group.id),
            student_id: Set(student_id),
            joined_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await
        .expect("add member");

        StudentRepository::new()
            .delete_with_children(student_id)
            .await
            .expect("delete student");

        let record = attendance_repo
            .find_by_pair(student_id, activity_id)
            .await
            .expect("query attendance");
        assert!(record.is_none());

        let members = group_repo
            .members_with_students(group.id)
            .await
            .expect("list members");
        assert!(members.is_empty());
    });
}
