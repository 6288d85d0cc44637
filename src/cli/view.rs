use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    info,
    session::Session,
    spotify::top::{SpotifyClient, TopItemsClient},
    success,
    utils::{self, TimeRange},
    view::{CycleOutcome, Render, TerminalRenderer, ViewController},
    warning,
};

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Re-run the render cycle for the current selection.
    Refresh,
    /// Switch the time range and re-run the render cycle.
    Range(TimeRange),
    /// Submit an access token. `None` means prompt for the value separately.
    Token(Option<String>),
    /// Forget the stored access token.
    TokenClear,
    /// Show the detail view for one track from the current list.
    Open(Selection),
    /// Print what the viewer does with the user's data.
    About,
    /// Print the command reference.
    Help,
    /// Leave the viewer.
    Quit,
    /// Blank input, ignored.
    Empty,
    /// Anything else, with a message describing the problem.
    Invalid(String),
}

/// How the user picked a track in an `open` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 1-based rank in the rendered list.
    Position(usize),
    /// Spotify track id.
    Id(String),
}

/// Parses one line of interactive input into a [`ViewCommand`].
///
/// Matching is case-insensitive on the command word. Never fails; anything
/// unparseable comes back as [`ViewCommand::Invalid`] with a message for the
/// user.
pub fn parse_view_command(line: &str) -> ViewCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ViewCommand::Empty;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default().to_lowercase();
    let rest = parts.next().map(str::trim).unwrap_or_default();

    match head.as_str() {
        "refresh" => ViewCommand::Refresh,
        "range" => match utils::parse_time_range(rest) {
            Ok(time_range) => ViewCommand::Range(time_range),
            Err(e) => ViewCommand::Invalid(e),
        },
        "token" if rest.eq_ignore_ascii_case("clear") => ViewCommand::TokenClear,
        "token" if rest.is_empty() => ViewCommand::Token(None),
        "token" => ViewCommand::Token(Some(rest.to_string())),
        "open" if rest.is_empty() => {
            ViewCommand::Invalid("open needs a rank or a track id".to_string())
        }
        "open" => match rest.parse::<usize>() {
            Ok(position) => ViewCommand::Open(Selection::Position(position)),
            Err(_) => ViewCommand::Open(Selection::Id(rest.to_string())),
        },
        "about" => ViewCommand::About,
        "help" | "?" => ViewCommand::Help,
        "quit" | "exit" | "q" => ViewCommand::Quit,
        other => ViewCommand::Invalid(format!("unknown command '{}' (try help)", other)),
    }
}

/// Runs the interactive top-items viewer.
///
/// Renders an initial cycle for the given time range, then reads commands
/// from stdin until the user quits or input ends. Every data operation goes
/// through the [`ViewController`]; this loop only parses input and reports
/// outcomes.
pub async fn browse(time_range: TimeRange) {
    let controller = ViewController::new(
        SpotifyClient::from_env(),
        TerminalRenderer::new(),
        Session::from_env(),
        time_range,
    );

    info!("Time range: {} ({})", time_range, time_range.label());
    report(controller.refresh().await);
    info!("Type help for commands, quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    while let Ok(Some(line)) = lines.next_line().await {
        match parse_view_command(&line) {
            ViewCommand::Quit => break,
            ViewCommand::Empty => {}
            ViewCommand::Help => print_help(),
            ViewCommand::About => print_about(),
            ViewCommand::Invalid(message) => warning!("{}", message),
            ViewCommand::Refresh => report(controller.refresh().await),
            ViewCommand::Range(time_range) => {
                controller.set_time_range(time_range);
                info!("Time range: {} ({})", time_range, time_range.label());
                report(controller.refresh().await);
            }
            ViewCommand::Token(Some(value)) => submit_and_refresh(&controller, &value).await,
            ViewCommand::Token(None) => {
                info!("Paste your access token:");
                prompt();
                match lines.next_line().await {
                    Ok(Some(value)) => submit_and_refresh(&controller, &value).await,
                    _ => break,
                }
            }
            ViewCommand::TokenClear => {
                controller.clear_credential();
                info!("Access token cleared.");
            }
            ViewCommand::Open(Selection::Position(position)) => {
                if !controller.show_details_at(position) {
                    warning!("No track at rank {} in the current list.", position);
                }
            }
            ViewCommand::Open(Selection::Id(id)) => {
                if !controller.show_details(&id) {
                    warning!("No track with id {} in the current list.", id);
                }
            }
        }
        prompt();
    }
}

/// Submits a token and, when it is accepted, starts a fresh render cycle.
async fn submit_and_refresh<C, R>(controller: &ViewController<C, R>, value: &str)
where
    C: TopItemsClient,
    R: Render,
{
    if controller.submit_credential(value) {
        success!("Access token updated.");
        report(controller.refresh().await);
    } else {
        warning!("That token is empty or the placeholder; nothing was stored.");
    }
}

/// Reports the outcome of a render cycle on the interactive loop's behalf.
/// The renderer has already drawn the lists or the relevant message.
fn report(outcome: CycleOutcome) {
    match outcome {
        CycleOutcome::Rendered { tracks, artists } => {
            success!("Loaded {} tracks and {} artists.", tracks, artists);
        }
        CycleOutcome::NoCredential | CycleOutcome::Error | CycleOutcome::Superseded => {}
    }
}

fn print_help() {
    info!("refresh             Reload both lists for the current time range");
    info!("range <r>           Switch time range: short, medium or long");
    info!("open <rank|id>      Show details for one track from the list");
    info!("token [value]       Enter a Spotify access token (token clear forgets it)");
    info!("about               What this viewer does with your data");
    info!("quit                Leave the viewer");
}

fn print_about() {
    info!("spotopcli shows the 5 most-played tracks and artists of the Spotify");
    info!("account the access token belongs to, for a selectable time range.");
    info!("The token is kept in memory for this run only and is sent to nothing");
    info!("but the Spotify Web API. No listening data is stored on disk.");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
