use colored::Colorize;
use dca_application::presentation::{CellStyle, ScreenView};
use dca_application::Opened;
use dca_core::case::{Priority, RecoveryStatus};
use dca_core::route::Route;

/// Terminal colours standing in for the priority and status badges.
pub fn paint(style: CellStyle, text: &str) -> String {
    match style {
        CellStyle::Plain => text.to_string(),
        CellStyle::Header => text.bold().to_string(),
        CellStyle::Muted => text.bright_black().to_string(),
        CellStyle::Priority(Priority::High) => text.bright_green().to_string(),
        CellStyle::Priority(Priority::Medium) => text.yellow().to_string(),
        CellStyle::Priority(Priority::Low) => text.bright_red().to_string(),
        CellStyle::Status(RecoveryStatus::LikelyRecoverable) => text.green().to_string(),
        CellStyle::Status(RecoveryStatus::ModerateRisk) => text.yellow().to_string(),
        CellStyle::Status(RecoveryStatus::HighRisk) => text.red().to_string(),
    }
}

pub fn print_view(view: &ScreenView) {
    for line in view.render_with(paint) {
        println!("{}", line);
    }
}

/// Prints whatever page a navigation ended on.
pub fn print_opened(opened: &Opened) {
    match opened.screen.view() {
        Some(view) => print_view(&view),
        None => print_login_hint(),
    }
}

pub fn print_login_hint() {
    println!("{}", "Not signed in.".yellow());
    println!(
        "{}",
        "Sign in with `dca login --username <name>` (or /login in the shell).".bright_black()
    );
}

/// Notes a redirect away from the requested route.
pub fn print_redirect(requested: Route, opened: &Opened) {
    if requested != opened.route && requested != Route::Root {
        println!(
            "{}",
            format!("Redirected from {} to {}", requested, opened.route).bright_black()
        );
    }
}
