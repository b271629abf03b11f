use acadesk::client::ApiClient;
use acadesk::utils::tracing::init_standard_tracing;
use clap::Parser;

#[derive(Debug, Parser)]
struct DashboardConfig {
    #[clap(long, env, default_value = "http://localhost:8080")]
    api_base_url: String,

    #[clap(long, env)]
    dashboard_email: String,

    #[clap(long, env)]
    dashboard_password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    let config = DashboardConfig::parse();
    let client = ApiClient::new(&config.api_base_url)?;

    let user = client
        .login(&config.dashboard_email, &config.dashboard_password)
        .await?;
    tracing::info!(
        "Logged in as {} ({})",
        user.name.as_deref().unwrap_or(&user.email),
        user.role
    );

    // Every collection must load before anything renders.
    let overview = client.load_overview().await?;

    println!("Faculty members: {}", overview.faculty.len());
    for member in &overview.faculty {
        println!(
            "  {} [{}] {}",
            member.name,
            member.rank,
            member.department.as_deref().unwrap_or("-")
        );
    }

    println!("Courses: {}", overview.courses.len());
    for course in &overview.courses {
        println!(
            "  {} {} (year {} semester {})",
            course.code, course.name, course.year, course.semester
        );
    }

    println!("Students: {}", overview.students.len());
    println!("Groups: {}", overview.groups.len());

    println!("Activities: {}", overview.activities.len());
    for activity in &overview.activities {
        println!(
            "  {} [{}] starts {}",
            activity.title, activity.activity_type, activity.start_date
        );
    }

    println!("Attendance records: {}", overview.attendance.len());
    println!("Labs: {}", overview.labs.len());
    println!("Exams: {}", overview.exams.len());
    println!("Teaching materials: {}", overview.materials.len());
    println!("Schedule assignments: {}", overview.schedule.len());

    Ok(())
}
