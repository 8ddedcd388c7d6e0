//! ClassNote command-line shell.
//!
//! # Responsibility
//! - Normalize user input and call the record store once per command.
//! - Re-fetch and print the affected list after every mutation.
//!
//! # Invariants
//! - The shell keeps no state between invocations; the selected student is
//!   the id passed on the command line.

use chrono::Local;
use classnote_core::model::record::format_record_date;
use classnote_core::{
    init_logging, AddStudentOutcome, Record, RecordId, RecordStore, RepoError, StoreConfig,
    Student, StudentId,
};
use clap::{Parser, Subcommand};
use log::error;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "classnote")]
#[command(version)]
#[command(about = "Keep dated notes about each student in a class")]
struct Cli {
    /// Path to the database file
    #[arg(long, global = true, default_value = classnote_core::config::DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all students
    Students,

    /// Register a new student
    AddStudent {
        /// Student name, must be unique
        name: String,
    },

    /// Delete a student and every record they own
    DeleteStudent {
        /// Student id as shown by `students`
        id: StudentId,
    },

    /// List a student's records, most recent first
    Records {
        /// Student id as shown by `students`
        student_id: StudentId,
    },

    /// Add a dated record for a student
    AddRecord {
        /// Student id as shown by `students`
        student_id: StudentId,

        /// Note text; may span several lines
        content: String,

        /// Record date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete one record
    DeleteRecord {
        /// Record id as shown by `records`
        id: RecordId,

        /// Owning student, whose records are re-listed afterwards
        student_id: StudentId,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = StoreConfig::default().with_db_path(cli.db);
    if let Some(log_dir) = cli.log_dir {
        config = config.with_log_dir(log_dir);
    }
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let store = RecordStore::from_config(&config);
    let output = Output { json: cli.json };
    match run(&store, &output, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: the action could not be completed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(store: &RecordStore, output: &Output, command: Commands) -> Result<(), RepoError> {
    store.initialize()?;

    match command {
        Commands::Students => output.students(&store.list_students()?),
        Commands::AddStudent { name } => {
            let name = name.trim();
            if name.is_empty() {
                eprintln!("warning: please enter a student name");
                return Ok(());
            }
            let outcome = store.add_student(name)?;
            if outcome == AddStudentOutcome::Duplicate {
                eprintln!("warning: '{name}' is already registered");
            }
            output.student_added(name, outcome, &store.list_students()?);
        }
        Commands::DeleteStudent { id } => {
            store.delete_student(id)?;
            output.message(&format!("Deleted student {id} and all of their records."));
            output.students(&store.list_students()?);
        }
        Commands::Records { student_id } => output.records(&store.list_records(student_id)?),
        Commands::AddRecord {
            student_id,
            content,
            date,
        } => {
            if content.trim().is_empty() {
                eprintln!("warning: please enter the record content");
                return Ok(());
            }
            let date = date.unwrap_or_else(|| format_record_date(Local::now().date_naive()));
            store.add_record(student_id, &date, &content)?;
            output.message("Record saved.");
            output.records(&store.list_records(student_id)?);
        }
        Commands::DeleteRecord { id, student_id } => {
            store.delete_record(id)?;
            output.message(&format!("Deleted record {id}."));
            output.records(&store.list_records(student_id)?);
        }
    }

    Ok(())
}

/// Prints store results as text or JSON.
struct Output {
    json: bool,
}

impl Output {
    fn message(&self, text: &str) {
        if !self.json {
            println!("{text}");
        }
    }

    fn students(&self, students: &[Student]) {
        println!("{}", self.render_students(students));
    }

    fn records(&self, records: &[Record]) {
        println!("{}", self.render_records(records));
    }

    fn student_added(&self, name: &str, outcome: AddStudentOutcome, students: &[Student]) {
        if self.json {
            println!("{}", json!({ "result": outcome, "students": students }));
            return;
        }
        if outcome.is_added() {
            println!("Added student '{name}'.");
            println!("{}", self.render_students(students));
        }
    }

    fn render_students(&self, students: &[Student]) -> String {
        if self.json {
            return json!(students).to_string();
        }
        if students.is_empty() {
            return "No students yet. Add one with `classnote add-student <name>`.".to_string();
        }
        students
            .iter()
            .map(|student| format!("{:>5}  {}", student.id, student.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_records(&self, records: &[Record]) -> String {
        if self.json {
            return json!(records).to_string();
        }
        if records.is_empty() {
            return "No records yet.".to_string();
        }
        let mut lines = Vec::new();
        for record in records {
            lines.push(format!(
                "[{}] {} (record {})",
                record.date,
                "-".repeat(20),
                record.id
            ));
            lines.extend(record.content.lines().map(|line| format!("    {line}")));
        }
        lines.join("\n")
    }
}
