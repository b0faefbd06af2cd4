//! Command-line interface for inspecting and checking a question bank.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::{BankError, Page, Question, QuestionBank};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file to load the questions from instead of the built-in catalog
    #[arg(short, long, env = "QUESTION_BANK_PATH", global = true)]
    pub questions: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every page and its question ids
    List,
    /// Show a page, or a single question on it
    Show {
        page: String,
        question: Option<String>,
        /// Mark the correct answers
        #[arg(long)]
        reveal: bool,
    },
    /// Check a selection of answers against a question
    Check {
        page: String,
        question: String,
        #[arg(required = true)]
        answers: Vec<String>,
    },
    /// Validate a catalog file, reporting every violation
    Validate { path: Option<PathBuf> },
    /// Print the catalog as JSON
    Export,
}

/// Result of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded; print the output.
    Ok(String),
    /// Command ran but the answer was wrong or the catalog is invalid.
    Failed(String),
}

/// Execute the parsed command.
pub fn execute(args: &Args) -> Result<CommandResult, BankError> {
    let source = match &args.command {
        Command::Validate { path: Some(path) } => Some(path.as_path()),
        _ => args.questions.as_deref(),
    };

    let bank = match load_bank(source) {
        Ok(bank) => bank,
        Err(BankError::Schema(err)) if matches!(args.command, Command::Validate { .. }) => {
            let mut out = format!("{}\n", err);
            for violation in &err.violations {
                out.push_str(&format!("  {}\n", violation));
            }
            return Ok(CommandResult::Failed(out));
        }
        Err(e) => return Err(e),
    };

    match &args.command {
        Command::List => Ok(cmd_list(&bank)),
        Command::Show {
            page,
            question,
            reveal,
        } => cmd_show(&bank, page, question.as_deref(), *reveal),
        Command::Check {
            page,
            question,
            answers,
        } => cmd_check(&bank, page, question, answers),
        Command::Validate { .. } => Ok(CommandResult::Ok(format!(
            "ok: {} page(s), {} question(s)\n",
            bank.len(),
            bank.question_count()
        ))),
        Command::Export => Ok(CommandResult::Ok(bank.to_json_pretty()? + "\n")),
    }
}

fn load_bank(path: Option<&Path>) -> Result<Cow<'static, QuestionBank>, BankError> {
    match path {
        Some(path) => {
            tracing::info!("loading questions from {}", path.display());
            Ok(Cow::Owned(QuestionBank::from_json_path(path)?))
        }
        None => Ok(Cow::Borrowed(QuestionBank::builtin())),
    }
}

fn cmd_list(bank: &QuestionBank) -> CommandResult {
    let mut out = String::new();
    for page in bank.pages() {
        out.push_str(page.id());
        out.push('\n');
        for id in page.question_ids() {
            out.push_str(&format!("  {}\n", id));
        }
    }
    CommandResult::Ok(out)
}

fn cmd_show(
    bank: &QuestionBank,
    page_id: &str,
    question_id: Option<&str>,
    reveal: bool,
) -> Result<CommandResult, BankError> {
    let out = match question_id {
        Some(question_id) => render_question(bank.get_question(page_id, question_id)?, reveal),
        None => render_page(bank.get_page(page_id)?, reveal),
    };
    Ok(CommandResult::Ok(out))
}

fn cmd_check(
    bank: &QuestionBank,
    page_id: &str,
    question_id: &str,
    answers: &[String],
) -> Result<CommandResult, BankError> {
    if bank.is_correct(page_id, question_id, answers)? {
        Ok(CommandResult::Ok("correct\n".to_string()))
    } else {
        Ok(CommandResult::Failed("incorrect\n".to_string()))
    }
}

fn render_page(page: &Page, reveal: bool) -> String {
    let mut out = format!("[{}]\n", page.id());
    for question in page.questions() {
        out.push('\n');
        out.push_str(&render_question(question, reveal));
    }
    out
}

fn render_question(question: &Question, reveal: bool) -> String {
    let hint = if question.is_multi_select() {
        " (select all that apply)"
    } else {
        ""
    };
    let mut out = format!("{}: {}{}\n", question.id(), question.text(), hint);

    for (i, answer) in question.answers().iter().enumerate() {
        let marker = if reveal && question.is_correct_answer(answer) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!("  {} {}) {}\n", marker, option_label(i), answer));
    }
    out
}

fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}
