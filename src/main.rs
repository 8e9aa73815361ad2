use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};

use course_console::auth::{AuthClient, TokenStore};
use course_console::calendar;
use course_console::config::{Config, GlobalArgs};
use course_console::guards::{self, GuardOutcome, Redirect};
use course_console::http_client::ApiClient;
use course_console::services::{
    AttendanceService, CourseService, DashboardService, LessonService, RankingService,
    StudentService, UserService,
};

/// Administration console for the course management platform
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List students
    Students,
    /// Show one student with enrollment and grades
    Student { id: i64 },
    /// List courses visible to the caller
    Courses,
    /// List lessons of a course
    Lessons {
        #[arg(long)]
        course: i64,
    },
    /// Attendance records for a date, or the month calendar
    Attendance {
        /// Date to list records for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the month calendar with recorded days marked
        #[arg(long)]
        calendar: bool,
    },
    /// Public top-student rankings
    Rankings {
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long)]
        location: Option<i64>,
    },
    /// Parent lookup: public performance report for a student
    Lookup { national_id: String },
    /// Admin dashboard summary
    Dashboard,
    /// List platform users (superadmin)
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_args(&cli.global)?;
    config.validate()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let store = Arc::new(TokenStore::open(config.session_file.clone()));
    let auth = Arc::new(AuthClient::new(config.api_url.clone(), store.clone())?);
    let api = Arc::new(ApiClient::new(
        config.api_url.clone(),
        store.clone(),
        auth.clone(),
        config.http_timeout,
    )?);

    match cli.command {
        Command::Login { username } => {
            let username = match username {
                Some(u) => u,
                None => Input::<String>::new().with_prompt("Username").interact_text()?,
            };
            let password = Password::new().with_prompt("Password").interact()?;
            let session = auth.login(&username, &password).await?;
            println!("Signed in as {} ({})", session.username, session.role);
        }

        Command::Logout => {
            auth.logout();
            println!("Signed out");
        }

        Command::Whoami => match store.user() {
            Some(user) => println!("{} ({})", user.username, user.role),
            None => println!("Not signed in"),
        },

        Command::Students => {
            require(guards::admin(store.user().as_ref()))?;
            let students = StudentService::new(api.clone()).list().await?;
            for s in &students {
                println!("{:>5}  {:<12}  {} {}", s.id, s.national_id, s.first_name, s.last_name);
            }
            println!("{} students", students.len());
        }

        Command::Student { id } => {
            require(guards::admin(store.user().as_ref()))?;
            let detail = StudentService::new(api.clone()).detail(id).await?;
            println!("{} {} ({})", detail.first_name, detail.last_name, detail.national_id);
            println!(
                "courses: {}  lessons: {}  passed: {}  failed: {}  average: {:.1}",
                detail.total_courses,
                detail.total_lessons,
                detail.passed_lessons,
                detail.failed_lessons,
                detail.average_score
            );
        }

        Command::Courses => {
            require(guards::admin(store.user().as_ref()))?;
            let service = CourseService::new(api.clone());
            let courses = if store.role().is_some_and(|r| r.is_superadmin()) {
                service.list().await?
            } else {
                service.list_for_admin().await?
            };
            for c in &courses {
                let start = c
                    .start_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into());
                println!("{:>5}  {:<30}  starts {}", c.id, c.name, start);
            }
        }

        Command::Lessons { course } => {
            require(guards::admin(store.user().as_ref()))?;
            let lessons = LessonService::new(api.clone()).by_course(course).await?;
            for l in &lessons {
                let date = l.date.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
                println!("{:>5}  {:<30}  {}", l.id, l.name, date);
            }
        }

        Command::Attendance { date, calendar } => {
            require(guards::admin(store.user().as_ref()))?;
            let service = AttendanceService::new(api.clone());
            let today = Local::now().date_naive();
            if calendar {
                let dates: HashSet<NaiveDate> =
                    service.dates_for_my_locations().await?.into_iter().collect();
                print_calendar(date.unwrap_or(today), &dates, today);
            } else {
                let records = service.by_my_locations_and_date(date.unwrap_or(today)).await?;
                for r in &records {
                    let mark = if r.is_present { "present" } else { "absent " };
                    println!("{}  {:<25}  {}", mark, r.student_name, r.course_name);
                }
                println!("{} records", records.len());
            }
        }

        Command::Rankings { limit, location } => {
            let service = RankingService::new(api.clone());
            let rankings = match location {
                Some(id) => service.top_students_by_location(id, limit).await?,
                None => service.top_students(limit).await?,
            };
            for r in &rankings {
                println!(
                    "{:>3}.  {} {}  total {:.0}  avg {:.1}",
                    r.rank, r.first_name, r.last_name, r.total_score, r.average_score
                );
            }
        }

        Command::Lookup { national_id } => {
            let report = RankingService::new(api.clone())
                .student_performance(&national_id)
                .await?;
            println!("{} {} ({})", report.first_name, report.last_name, report.national_id);
            println!(
                "courses: {}  lessons: {}  passed: {}  failed: {}  average: {:.1}",
                report.total_courses,
                report.total_lessons,
                report.passed_lessons,
                report.failed_lessons,
                report.average_score
            );
            if let Some(rate) = report.attendance_rate {
                println!("attendance: {:.0}%", rate);
            }
            if let Some(level) = &report.performance_level {
                println!("level: {}", level);
            }
            for c in report.courses.iter().flatten() {
                let avg = c
                    .average_score
                    .map(|a| format!("{:.1}", a))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "  {:<30}  avg {}  passed {}  failed {}",
                    c.course_name, avg, c.passed_lessons, c.failed_lessons
                );
            }
        }

        Command::Dashboard => {
            require(guards::admin(store.user().as_ref()))?;
            let dash = DashboardService::new(api.clone()).admin_dashboard().await?;
            println!(
                "courses: {}  students: {}  lessons: {}  notes: {}",
                dash.course_count, dash.student_count, dash.lesson_count, dash.note_count
            );
            for loc in &dash.locations {
                println!("  {:<25}  {} students", loc.name, loc.student_count);
            }
        }

        Command::Users => {
            require(guards::superadmin(store.user().as_ref()))?;
            let users = UserService::new(api.clone()).list().await?;
            for u in &users {
                println!("{:>5}  {:<20}  {}", u.id, u.username, u.role);
            }
        }
    }

    Ok(())
}

/// Map a guard denial to a console error
fn require(outcome: GuardOutcome) -> Result<()> {
    match outcome {
        GuardOutcome::Admit => Ok(()),
        GuardOutcome::Deny(Redirect::Login) => {
            bail!("not signed in; run `course-console login` first")
        }
        GuardOutcome::Deny(_) => bail!("your role does not allow this command"),
    }
}

fn print_calendar(anchor: NaiveDate, available: &HashSet<NaiveDate>, today: NaiveDate) {
    println!("{:^28}", anchor.format("%B %Y").to_string());
    println!("Mo  Tu  We  Th  Fr  Sa  Su");
    for (i, day) in calendar::month_grid(anchor, available, today).iter().enumerate() {
        let mark = if day.other_month {
            "  ".to_string()
        } else if day.has_attendance {
            format!("{:>2}*", day.day_number)
        } else {
            format!("{:>2}", day.day_number)
        };
        print!("{:<4}", mark);
        if (i + 1) % 7 == 0 {
            println!();
        }
    }
}
