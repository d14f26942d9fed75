use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{ColorMode, Context, Editor, Helper};

use crate::commands;
use crate::context::AppContext;
use crate::render;
use dca_application::{LoginState, Opened};
use dca_core::auth::Credentials;
use dca_core::case::PriorityFilter;
use dca_core::route::Route;

const COMMANDS: [&str; 8] = [
    "/login", "/open", "/filter", "/refresh", "/logout", "/whoami", "/help", "/quit",
];

const ROUTES: [&str; 4] = ["/", "/login", "/admin-dashboard", "/dca-dashboard"];

/// Completion candidates for the text before the cursor.
///
/// Returns the replacement start and the matching words: command names for
/// the first word, routes after `/open`, filter values after `/filter`.
fn candidates(line: &str) -> (usize, Vec<String>) {
    if !line.starts_with('/') {
        return (0, Vec::new());
    }

    let Some((command, arg)) = line.split_once(' ') else {
        let words = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| cmd.to_string())
            .collect();
        return (0, words);
    };

    let start = command.len() + 1;
    let words: Vec<String> = match command {
        "/open" => ROUTES
            .iter()
            .filter(|route| route.starts_with(arg))
            .map(|route| route.to_string())
            .collect(),
        "/filter" => PriorityFilter::OPTIONS
            .iter()
            .map(|f| f.value())
            .filter(|value| value.starts_with(arg))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    (start, words)
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone, Default)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Masks everything typed at the password prompt.
#[derive(Default)]
struct MaskingHelper;

impl Helper for MaskingHelper {}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Reads a password without echoing it or adding it to history.
pub fn read_password() -> Result<String> {
    let mut rl: Editor<MaskingHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(MaskingHelper));
    rl.set_color_mode(ColorMode::Forced);
    rl.set_auto_add_history(false);
    Ok(rl.readline("Password: ")?)
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /login <username> [password]   Sign in (prompts for the password)");
    println!("  /open <route>                  Open /, /login, /admin-dashboard or /dca-dashboard");
    println!("  /filter <All|High|Medium|Low>  Filter the current dashboard");
    println!("  /refresh                       Reload the current dashboard");
    println!("  /logout                        Sign out");
    println!("  /whoami                        Show the signed-in user");
    println!("  /help                          Show this help");
    println!("  /quit                          Exit");
}

/// Interactive console state.
struct Shell<'a> {
    ctx: &'a AppContext,
    current: Option<Opened>,
}

impl<'a> Shell<'a> {
    fn new(ctx: &'a AppContext) -> Self {
        Self { ctx, current: None }
    }

    async fn open(&mut self, route: Route, filter: PriorityFilter) -> Result<()> {
        let Some(mut opened) = commands::navigate(&self.ctx.console, route).await? else {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        };
        render::print_redirect(route, &opened);
        opened.screen.set_filter(filter);
        render::print_opened(&opened);
        self.current = Some(opened);
        Ok(())
    }

    async fn login(&mut self, args: &[&str]) -> Result<()> {
        let (username, password) = match args {
            [username] => (username.to_string(), read_password()?),
            [username, password] => (username.to_string(), password.to_string()),
            _ => {
                println!("{}", "Usage: /login <username> [password]".yellow());
                return Ok(());
            }
        };

        let mut form = self.ctx.console.login_controller();
        let destination = match form.submit(Credentials::new(username, password)).await {
            LoginState::Success { user, destination } => {
                println!("{}", format!("Welcome, {}", user.username).green());
                *destination
            }
            LoginState::Failed { message } => {
                println!("{}", message.red());
                return Ok(());
            }
            _ => return Ok(()),
        };
        self.open(destination, PriorityFilter::All).await
    }

    fn filter(&mut self, args: &[&str]) {
        let [value] = args else {
            println!("{}", "Usage: /filter <All|High|Medium|Low>".yellow());
            return;
        };
        let filter: PriorityFilter = match value.parse() {
            Ok(filter) => filter,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        };
        match self.current.as_mut() {
            Some(opened) if opened.screen.filter().is_some() => {
                opened.screen.set_filter(filter);
                render::print_opened(opened);
            }
            _ => println!("{}", "No dashboard open.".yellow()),
        }
    }

    async fn refresh(&mut self) -> Result<()> {
        let Some(opened) = self.current.as_ref() else {
            println!("{}", "Nothing to refresh.".yellow());
            return Ok(());
        };
        let route = opened.route;
        let filter = opened.screen.filter().unwrap_or_default();
        self.open(route, filter).await
    }

    fn logout(&mut self) {
        self.ctx.console.logout();
        self.current = None;
        println!("{}", "Signed out.".green());
    }

    /// Handles one input line. Returns false when the shell should exit.
    async fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(true);
        };
        let args: Vec<&str> = words.collect();

        match command {
            "/quit" | "quit" | "exit" => return Ok(false),
            "/help" => print_help(),
            "/login" => self.login(&args).await?,
            "/open" => match args.as_slice() {
                [route] => match route.parse::<Route>() {
                    Ok(route) => self.open(route, PriorityFilter::All).await?,
                    Err(e) => println!("{}", e.to_string().red()),
                },
                _ => println!("{}", "Usage: /open <route>".yellow()),
            },
            "/filter" => self.filter(&args),
            "/refresh" => self.refresh().await?,
            "/logout" => self.logout(),
            "/whoami" => commands::session::whoami(self.ctx),
            other => println!(
                "{}",
                format!("Unknown command '{}'. Type /help.", other).bright_black()
            ),
        }
        Ok(true)
    }
}

/// Runs the interactive console until /quit or EOF.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== DCA Console ===".bright_magenta().bold());
    println!("{}", "Type /help for commands, /quit to exit.".bright_black());
    println!();

    let mut shell = Shell::new(ctx);
    let start = match ctx.console.session() {
        Some(session) => Route::home_for(&session.user),
        None => Route::Root,
    };
    shell.open(start, PriorityFilter::All).await?;

    loop {
        match rl.readline("dca> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Keep typed passwords out of history
                if !trimmed.starts_with("/login") {
                    let _ = rl.add_history_entry(trimmed);
                }

                match shell.dispatch(trimmed).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Shell command failed");
                        println!("{}", format!("Error: {:#}", e).red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
