//! A line-oriented front end over the page controllers.
//!
//! Each page keeps its own state for the lifetime of the console; the console
//! only forwards input and prints whatever the page holds afterwards.

pub mod commands;
pub mod render;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::analysis::{CareerPage, SkillAnalysisPage};
use crate::insights::MarketSnapshot;
use crate::interview::{InterviewSession, SessionState};
use crate::listings::{CoursePage, JobPage};
use crate::notify::Outcome;
use crate::progress::ProgressSnapshot;
use crate::state::AppState;

pub use commands::{parse_command, Command, ListKind, USAGE};

pub struct Console {
    state: AppState,
    skills: SkillAnalysisPage,
    careers: CareerPage,
    courses: CoursePage,
    jobs: JobPage,
    interview: InterviewSession,
    progress: ProgressSnapshot,
    market: MarketSnapshot,
}

impl Console {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            skills: SkillAnalysisPage::new(),
            careers: CareerPage::new(),
            courses: CoursePage::new(),
            jobs: JobPage::new(),
            interview: InterviewSession::new(),
            progress: ProgressSnapshot::sample(),
            market: MarketSnapshot::sample(),
        }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("Console ready (backend {})", self.state.config.backend_url);
        println!("{}", USAGE);
        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let output = match parse_command(&line) {
                Ok(Some(command)) => match self.handle(command).await {
                    Some(output) => output,
                    None => break,
                },
                Ok(None) => continue,
                Err(message) => format!("{message}\n\n{USAGE}"),
            };
            if !output.is_empty() {
                println!("{output}");
            }
        }

        info!("Console closed");
        Ok(())
    }

    /// Runs one command and returns the text to print, or `None` to quit.
    pub async fn handle(&mut self, command: Command) -> Option<String> {
        debug!(?command, "handling command");
        let gateway = self.state.gateway.as_ref();
        let notifier = self.state.notifier.as_ref();

        let output = match command {
            Command::Help => USAGE.to_string(),
            Command::Quit => return None,
            Command::Analyze(skills) => {
                self.skills.skills_input = skills;
                match self.skills.submit(gateway, notifier).await {
                    Outcome::Completed => render::analysis(self.skills.result()),
                    _ => String::new(),
                }
            }
            Command::Careers {
                skills,
                interests,
                budget,
            } => {
                self.careers.skills_input = skills;
                self.careers.interests_input = interests;
                self.careers.budget_input = budget;
                match self.careers.submit(gateway, notifier).await {
                    Outcome::Completed => render::careers(self.careers.careers()),
                    _ => String::new(),
                }
            }
            Command::Budgets => render::budgets(),
            Command::Show(ListKind::Courses) => {
                self.courses.mount(gateway, notifier).await;
                render::courses(self.courses.view())
            }
            Command::Show(ListKind::Jobs) => {
                self.jobs.mount(gateway, notifier).await;
                render::jobs(self.jobs.view())
            }
            // Retry is only offered while the list shows nothing.
            Command::Retry(ListKind::Courses) => {
                if !self.courses.can_retry() {
                    let shown = self.courses.items().len();
                    return Some(if shown == 0 {
                        "Nothing loaded yet; type 'courses' first.".to_string()
                    } else {
                        format!("{shown} courses already shown; nothing to retry.")
                    });
                }
                self.courses.retry(gateway, notifier).await;
                render::courses(self.courses.view())
            }
            Command::Retry(ListKind::Jobs) => {
                if !self.jobs.can_retry() {
                    let shown = self.jobs.items().len();
                    return Some(if shown == 0 {
                        "Nothing loaded yet; type 'jobs' first.".to_string()
                    } else {
                        format!("{shown} jobs already shown; nothing to retry.")
                    });
                }
                self.jobs.retry(gateway, notifier).await;
                render::jobs(self.jobs.view())
            }
            Command::InterviewStart => match self.interview.start(gateway, notifier).await {
                Outcome::Completed => render::transcript(self.interview.transcript()),
                Outcome::Ignored => "An interview is already in progress. Use 'interview reset' to start over.".to_string(),
                _ => String::new(),
            },
            Command::Answer(text) => {
                if self.interview.state() == SessionState::NotStarted {
                    return Some("Start an interview first with 'interview start'.".to_string());
                }
                if self.interview.is_busy() {
                    return Some("Still waiting for the interviewer to respond.".to_string());
                }
                self.interview.set_draft(text);
                match self.interview.submit_draft(gateway, notifier).await {
                    Outcome::Rejected | Outcome::Ignored => String::new(),
                    _ => render::transcript(self.interview.transcript()),
                }
            }
            Command::InterviewReset => {
                self.interview.reset();
                "Interview reset.".to_string()
            }
            Command::Transcript => render::transcript(self.interview.transcript()),
            Command::Progress => render::progress(&self.progress.report()),
            Command::Insights => render::insights(&self.market, &self.market.report()),
        };
        Some(output)
    }
}
