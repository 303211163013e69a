use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fcd_checklist::checklist::{Answer, ChecklistSession, ItemId, Mode, StateSlot};
use fcd_checklist::config::AppConfig;
use fcd_checklist::error::AppError;
use fcd_checklist::telemetry;
use serde::Serialize;
use tracing::info;

use crate::infra::{confirm, open_session, parse_item_id};
use crate::render::{checklist_text, item_text};

#[derive(Parser, Debug)]
#[command(
    name = "FCD Checklist",
    about = "Functional cognitive disorder diagnostic orientation aid for the terminal",
    version
)]
struct Cli {
    /// Directory holding the saved answers (overrides FCD_STATE_DIR)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
    /// Print the checklist as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the applicable items, score and interpretation (default command)
    Show,
    /// Record an answer for one item
    Answer(AnswerArgs),
    /// Switch between the short and the full question set
    Toggle,
    /// Select the question set explicitly
    Mode {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Clear all answers; the question set stays selected
    Reset(ResetArgs),
    /// Print the scoring instruction for one item
    Info {
        /// Item number as listed in the catalog
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
}

#[derive(Args, Debug)]
struct AnswerArgs {
    /// Item number as listed in the catalog
    #[arg(value_parser = parse_item_id)]
    id: ItemId,
    /// Answer to record
    #[arg(value_enum)]
    answer: AnswerArg,
}

#[derive(Args, Debug)]
struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AnswerArg {
    Yes,
    No,
}

impl From<AnswerArg> for Answer {
    fn from(value: AnswerArg) -> Self {
        match value {
            AnswerArg::Yes => Answer::Yes,
            AnswerArg::No => Answer::No,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    Short,
    Full,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Short => Mode::Short,
            ModeArg::Full => Mode::Full,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.state_dir)?;
    telemetry::init(&config.telemetry, cli.verbose)?;

    info!(
        ?config.environment,
        state_dir = %config.storage.state_dir.display(),
        "checklist session starting"
    );

    let mut session = open_session(&config.storage);
    let command = cli.command.unwrap_or(Command::Show);
    dispatch(&mut session, command, cli.json)
}

fn dispatch<S: StateSlot>(
    session: &mut ChecklistSession<S>,
    command: Command,
    json: bool,
) -> Result<(), AppError> {
    match command {
        Command::Show => {}
        Command::Answer(AnswerArgs { id, answer }) => session.answer(id, answer.into())?,
        Command::Toggle => {
            session.toggle_mode();
        }
        Command::Mode { mode } => session.set_mode(mode.into()),
        Command::Reset(ResetArgs { yes }) => {
            let stdin = io::stdin();
            let confirmed = yes
                || confirm("Alle Antworten zurücksetzen?", &mut stdin.lock(), &mut io::stdout())?;
            if confirmed {
                session.reset();
            } else {
                println!("Zurücksetzen abgebrochen.");
            }
        }
        Command::Info { id } => {
            let detail = session.item_detail(id)?;
            return emit(&detail, json, || item_text(&detail));
        }
    }

    let view = session.view();
    emit(&view, json, || checklist_text(&view))
}

fn emit<T: Serialize>(
    value: &T,
    json: bool,
    text: impl FnOnce() -> String,
) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
        println!("{rendered}");
    } else {
        println!("{}", text());
    }
    Ok(())
}
