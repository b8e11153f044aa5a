use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use eduplatform_core::config::Config;
use eduplatform_core::models::{
    Assignment, ChatAssistRequest, Course, CourseList, PasswordChangeRequest, ProfileUpdate,
    RegisterLecturerRequest, RegisterStudentRequest, Test, UserProfile, UserRole,
};
use eduplatform_core::{ApiClient, MultipartBuilder};
use serde::Serialize;
use tracing::warn;

use crate::account::{self, Registration};
use crate::host::{build_client, open_store, StoreChoice};

/// Environment variable read for the password before prompting
const PASSWORD_ENV: &str = "EDUPLATFORM_PASSWORD";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = concat!(
    "Environment variables:\n",
    "  EDUPLATFORM_API_URL   API base URL (default http://127.0.0.1:8000)\n",
    "  EDUPLATFORM_PASSWORD  Password used by `login` instead of prompting\n",
    "  RUST_LOG              Log filter (default warn)",
))]
pub struct RootCommand {
    #[command(flatten)]
    pub args: RootArgs,

    #[command(subcommand)]
    pub action: SubCommands,
}

#[derive(Debug, Parser)]
pub struct RootArgs {
    /// API base URL, overriding the environment and config file
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,

    /// Keep the session in a file instead of the system keyring
    #[arg(long)]
    pub session_file: bool,

    /// Directory for the session file (implies --session-file)
    #[arg(long, value_name = "DIR")]
    pub session_dir: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum SubCommands {
    /// Log in and remember the session
    Login {
        /// Account email; defaults to the last one used
        #[arg(long)]
        email: Option<String>,
    },
    /// End the session
    Logout,
    /// Create a student or lecturer account
    #[command(subcommand)]
    Register(RegisterCommand),
    /// Show the logged-in profile
    Me,
    /// Update profile fields
    Profile(ProfileArgs),
    /// Change the account password
    Password,
    /// List courses
    Courses {
        /// Courses you teach
        #[arg(long, conflicts_with = "enrolled")]
        mine: bool,
        /// Courses you are enrolled in
        #[arg(long)]
        enrolled: bool,
    },
    /// List assignments
    Assignments {
        /// Only this course's assignments
        #[arg(long, value_name = "COURSE_ID")]
        course: Option<String>,
    },
    /// List tests
    Tests {
        /// Only this course's tests
        #[arg(long, value_name = "COURSE_ID")]
        course: Option<String>,
    },
    /// Submit a file for an assignment
    Submit {
        assignment_id: String,
        file: PathBuf,
        /// Text answer sent alongside the file
        #[arg(long)]
        content: Option<String>,
    },
    /// Upload a course material
    UploadMaterial {
        course_id: String,
        file: PathBuf,
        /// Material title; defaults to the file name
        #[arg(long)]
        title: Option<String>,
    },
    /// Search courses and materials
    Search { query: String },
    /// Ask the AI assistant
    Chat { message: String },
    /// Profile, courses and unread notifications at a glance
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum RegisterCommand {
    Student {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        major: Option<String>,
        /// Year of study (1-6)
        #[arg(long)]
        year: Option<u8>,
        #[arg(long)]
        institution: Option<String>,
    },
    Lecturer {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        employee_id: Option<String>,
    },
}

/// Fields shared by both registration forms. The password is prompted for.
#[derive(Debug, Args)]
pub struct AccountArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl ProfileArgs {
    fn into_update(self) -> Option<ProfileUpdate> {
        let update = ProfileUpdate {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        };
        let empty = update.email.is_none()
            && update.first_name.is_none()
            && update.last_name.is_none()
            && update.phone.is_none();
        (!empty).then_some(update)
    }
}

impl RegisterCommand {
    fn into_registration(self, password: String) -> Registration {
        match self {
            RegisterCommand::Student {
                account,
                phone,
                student_id,
                major,
                year,
                institution,
            } => Registration::Student(RegisterStudentRequest {
                email: account.email,
                password,
                first_name: account.first_name,
                last_name: account.last_name,
                phone,
                student_id,
                major,
                year,
                institution,
            }),
            RegisterCommand::Lecturer {
                account,
                institution,
                phone,
                title,
                department,
                employee_id,
            } => Registration::Lecturer(RegisterLecturerRequest {
                email: account.email,
                password,
                first_name: account.first_name,
                last_name: account.last_name,
                institution,
                phone,
                title,
                department,
                employee_id,
                bio: None,
            }),
        }
    }

    fn email(&self) -> &str {
        match self {
            RegisterCommand::Student { account, .. }
            | RegisterCommand::Lecturer { account, .. } => &account.email,
        }
    }
}

impl RootCommand {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable config file");
            Config::default()
        });

        let choice = match (self.args.session_file, self.args.session_dir) {
            (_, Some(dir)) => StoreChoice::File(Some(dir)),
            (true, None) => StoreChoice::File(None),
            (false, None) => StoreChoice::Keyring,
        };
        let store = open_store(choice, &config)?;
        let client = build_client(self.args.api.as_deref(), store)?;
        let out = Output { json: self.args.json };

        match self.action {
            SubCommands::Login { email } => login(&client, &mut config, email).await,
            SubCommands::Logout => {
                account::logout(&client).await;
                Ok(())
            }
            SubCommands::Register(command) => {
                let email = command.email().to_string();
                let password = read_password(&email)?;
                account::register(&client, &command.into_registration(password)).await?;
                config.last_email = Some(email.clone());
                save_config(&config);
                println!("Log in with `eduplatform login --email {}`", email);
                Ok(())
            }
            SubCommands::Me => {
                require_session(&client)?;
                let profile = client.auth().me().await?;
                out.emit(&profile, || profile_line(&profile))
            }
            SubCommands::Profile(args) => {
                let Some(update) = args.into_update() else {
                    bail!("Nothing to update; pass at least one field");
                };
                let profile = account::update_profile(&client, &update).await?;
                out.emit(&profile, || profile_line(&profile))
            }
            SubCommands::Password => {
                let current = rpassword::prompt_password("Current password: ")
                    .context("Failed to read password")?;
                let new = rpassword::prompt_password("New password: ")
                    .context("Failed to read password")?;
                let confirm = rpassword::prompt_password("Repeat new password: ")
                    .context("Failed to read password")?;
                if new != confirm {
                    bail!("Passwords do not match");
                }
                let request = PasswordChangeRequest {
                    current_password: current,
                    new_password: new,
                };
                account::change_password(&client, &request).await?;
                Ok(())
            }
            SubCommands::Courses { mine, enrolled } => {
                let list = if mine {
                    let profile = client.auth().me().await?;
                    client.courses().lecturer_courses(&profile.id, true).await?
                } else if enrolled {
                    client.courses().student_courses().await?
                } else {
                    client.courses().all(false).await?
                };
                out.emit(&list, || course_lines(&list))
            }
            SubCommands::Assignments { course } => {
                let list = match course {
                    Some(id) => client.assignments().for_course(&id).await?,
                    None => client.assignments().student_assignments().await?,
                };
                out.emit(&list, || lines(&list.assignments, assignment_line))
            }
            SubCommands::Tests { course } => {
                let list = match course {
                    Some(id) => client.tests().for_course(&id).await?,
                    None => client.tests().student_tests().await?,
                };
                out.emit(&list, || lines(&list.tests, test_line))
            }
            SubCommands::Submit {
                assignment_id,
                file,
                content,
            } => {
                let form = MultipartBuilder::new()
                    .text_opt("content", content)
                    .file("file", &file)
                    .await?
                    .build();
                let response = client.assignments().submit(&assignment_id, form).await?;
                out.emit(&response, || {
                    response
                        .message
                        .clone()
                        .unwrap_or_else(|| "Submitted".to_string())
                })
            }
            SubCommands::UploadMaterial {
                course_id,
                file,
                title,
            } => {
                let title = match title {
                    Some(t) => t,
                    None => file
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .context("Cannot derive a title from the file name; pass --title")?
                        .to_string(),
                };
                let form = MultipartBuilder::new()
                    .text("title", title)
                    .file("file", &file)
                    .await?
                    .build();
                let response = client.courses().upload_materials(&course_id, form).await?;
                out.emit(&response, || {
                    response
                        .message
                        .clone()
                        .unwrap_or_else(|| "Uploaded".to_string())
                })
            }
            SubCommands::Search { query } => {
                let results = client.utils().search(&query).await?;
                out.emit(&results, || {
                    let total = results.total.unwrap_or(results.results.len());
                    let mut text = format!("{} result(s)", total);
                    for item in &results.results {
                        let label = item
                            .get("title")
                            .or_else(|| item.get("name"))
                            .and_then(|v| v.as_str())
                            .unwrap_or("(untitled)");
                        text.push_str(&format!("\n  {}", label));
                    }
                    text
                })
            }
            SubCommands::Chat { message } => {
                let reply = client
                    .ai()
                    .chat_assist(&ChatAssistRequest {
                        message,
                        context: None,
                    })
                    .await?;
                out.emit(&reply, || reply.response.clone())
            }
            SubCommands::Dashboard => {
                require_session(&client)?;
                dashboard(&client, out).await
            }
        }
    }
}

async fn login(client: &ApiClient, config: &mut Config, email: Option<String>) -> Result<()> {
    let email = match email.or_else(|| config.last_email.clone()) {
        Some(e) => e,
        None => bail!("No email given; pass --email"),
    };
    let password = read_password(&email)?;

    let response = account::login(client, &email, password).await?;

    config.last_email = Some(email.clone());
    save_config(config);

    println!("Logged in as {} ({})", email, response.role.as_str());
    Ok(())
}

fn read_password(email: &str) -> Result<String> {
    match std::env::var(PASSWORD_ENV) {
        Ok(p) if !p.is_empty() => Ok(p),
        _ => rpassword::prompt_password(format!("Password for {}: ", email))
            .context("Failed to read password"),
    }
}

fn save_config(config: &Config) {
    if let Err(e) = config.save() {
        warn!(error = %e, "Failed to save config");
    }
}

/// Fail fast without a stored token instead of letting the server 401.
fn require_session(client: &ApiClient) -> Result<()> {
    if !client.is_authenticated() {
        bail!("Not logged in; run `eduplatform login`");
    }
    Ok(())
}

/// Profile, courses and inbox fetched concurrently.
async fn dashboard(client: &ApiClient, out: Output) -> Result<()> {
    let profile = client.auth().me().await?;

    let courses = async {
        match profile.role {
            UserRole::Lecturer => client.courses().lecturer_courses(&profile.id, true).await,
            UserRole::Student => client.courses().student_courses().await,
            UserRole::Admin | UserRole::Unknown => client.courses().all(true).await,
        }
    };
    let notifications = client.notifications();
    let (courses, inbox) = futures::join!(courses, notifications.all());
    let courses = courses?;
    let inbox = inbox?;

    #[derive(Serialize)]
    struct Dashboard<'a> {
        profile: &'a UserProfile,
        courses: &'a CourseList,
        unread_notifications: usize,
    }
    let view = Dashboard {
        profile: &profile,
        courses: &courses,
        unread_notifications: inbox.unread(),
    };

    out.emit(&view, || {
        format!(
            "{} ({})\n{} unread notification(s)\n{}",
            profile.full_name(),
            profile.role.as_str(),
            inbox.unread(),
            course_lines(&courses)
        )
    })
}

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, summary: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", summary());
        }
        Ok(())
    }
}

fn lines<T>(items: &[T], line: fn(&T) -> String) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

fn profile_line(profile: &UserProfile) -> String {
    format!(
        "{} <{}> ({})",
        profile.full_name(),
        profile.email,
        profile.role.as_str()
    )
}

fn course_lines(list: &CourseList) -> String {
    let mut text = format!("{} course(s)", list.count());
    for course in &list.courses {
        text.push_str(&format!("\n  {}", course_line(course)));
    }
    text
}

fn course_line(course: &Course) -> String {
    let state = if course.is_published { "" } else { " [draft]" };
    format!("{}  {}{}", course.id, course.display_name(), state)
}

fn assignment_line(a: &Assignment) -> String {
    match a.due_date.as_deref() {
        Some(due) => format!("{}  {} (due {})", a.id, a.title, due),
        None => format!("{}  {}", a.id, a.title),
    }
}

fn test_line(t: &Test) -> String {
    match t.duration {
        Some(minutes) => format!("{}  {} ({} min)", t.id, t.title, minutes),
        None => format!("{}  {}", t.id, t.title),
    }
}
