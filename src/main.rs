use {
  anyhow::Context,
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  help_view::HelpView,
  hit::Hit,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
    },
  },
  reqwest::Url,
  results_cache::ResultsCache,
  search_input::SearchInput,
  search_response::SearchResponse,
  search_result::SearchResult,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  sort_key::SortKey,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    cmp::Ordering,
    collections::{HashMap, HashSet},
    fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  table_view::TableView,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{
    centered_rect, deserialize_object_id, deserialize_optional_string,
    format_count, saturating_usize_to_u16, truncate,
  },
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod event;
mod help_view;
mod hit;
mod results_cache;
mod search_input;
mod search_response;
mod search_result;
mod sort_key;
mod state;
mod table_view;
mod transient_message;
mod utils;

const TABLE_STATUS: &str =
  "↑/k up • ↓/j down • t/a/c/p sort • x dismiss • m more • / search • ? help";

const SEARCH_STATUS: &str = "type to edit • enter search • esc cancel";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_MORE_STATUS: &str = "Loading more results...";
const NO_MORE_RESULTS_STATUS: &str = "No more results";

const ERROR_TEXT: &str = "Something went wrong.";
const LOADING_TEXT: &str = "Loading...";
const MORE_TEXT: &str = "More (m)";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first result
  end     jump to last result

Search:
  /       edit the search term
  enter   submit (cached terms are not fetched again)
  esc     cancel editing

Table:
  t       sort by title
  a       sort by author
  c       sort by comments
  p       sort by points
  r       back to fetch order
          pressing the same sort again reverses it
  x       dismiss the selected result
  m       load the next page
  o       open the selected result in your browser
  enter   same as o

  ?       toggle this help
  q       quit
  esc     close help or quit
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(path: Option<&Path>) -> Result {
  let Some(path) = path else {
    return Ok(());
  };

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .target(env_logger::Target::Pipe(Box::new(file)))
  .try_init()?;

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging(arguments.log_file.as_deref())
    .context("could not initialize logging")?;

  log::info!(
    "starting with query {:?}, {} hits per page",
    arguments.query,
    arguments.hits_per_page
  );

  let client = Client::new(arguments.hits_per_page.into());

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, arguments.query);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    log::error!("{error:#}");

    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
