//! Learnboard CLI Client
//!
//! Command-line interface for a running Learnboard server.

use clap::{Parser, Subcommand};
use learnboard::network::Client;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Learnboard CLI
#[derive(Parser, Debug)]
#[command(name = "learnboard-cli")]
#[command(about = "CLI for the Learnboard REST API")]
#[command(version)]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:5000", env = "LEARNBOARD_URL")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the current user
    User,

    /// List subjects
    Subjects,

    /// List courses (enrolled only, unless a flag is given)
    Courses {
        /// Every course, flagged with enrollment
        #[arg(long, conflicts_with = "recommended")]
        all: bool,

        /// Courses you are not enrolled in
        #[arg(long)]
        recommended: bool,
    },

    /// Show one course
    Course {
        /// Course id
        id: u32,
    },

    /// List a course's lessons
    Lessons {
        /// Course id
        course_id: u32,
    },

    /// Enroll in a course
    Enroll {
        /// Course id
        course_id: u32,
    },

    /// Set an enrollment's progress (percent)
    Progress {
        /// Enrollment id
        enrollment_id: u32,

        /// New progress value
        #[arg(allow_negative_numbers = true)]
        progress: i32,
    },

    /// List earned achievements
    Achievements,

    /// Show streak counts by day
    Streaks,

    /// Record a learning streak for today
    RecordStreak,

    /// Check the server is up
    Ping,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let client = Client::new(&args.server);

    if let Err(e) = run(&client, args.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(client: &Client, command: Commands) -> learnboard::Result<()> {
    match command {
        Commands::User => print(&client.user()?),
        Commands::Subjects => print(&client.subjects()?),
        Commands::Courses { all: true, .. } => print(&client.all_courses()?),
        Commands::Courses { recommended: true, .. } => print(&client.recommended_courses()?),
        Commands::Courses { .. } => print(&client.enrolled_courses()?),
        Commands::Course { id } => print(&client.course(id)?),
        Commands::Lessons { course_id } => print(&client.lessons(course_id)?),
        Commands::Enroll { course_id } => print(&client.enroll(course_id)?),
        Commands::Progress {
            enrollment_id,
            progress,
        } => print(&client.update_progress(enrollment_id, progress)?),
        Commands::Achievements => print(&client.achievements()?),
        Commands::Streaks => print(&client.streaks()?),
        Commands::RecordStreak => print(&client.record_streak()?),
        Commands::Ping => {
            if client.ping()? {
                println!("OK");
            } else {
                println!("server at {} is unhealthy", client.base_url());
            }
            Ok(())
        }
    }
}

/// Pretty-print a response body as JSON
fn print<T: Serialize>(value: &T) -> learnboard::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
