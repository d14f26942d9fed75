use crate::context::AppContext;
use anyhow::{Result, bail};
use colored::Colorize;
use dca_application::LoginState;
use dca_core::auth::Credentials;

/// `dca login`. Prompts for the password when it was not given.
pub async fn login(ctx: &AppContext, username: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => crate::shell::read_password()?,
    };

    let mut form = ctx.console.login_controller();
    match form.submit(Credentials::new(username, password)).await {
        LoginState::Success { user, destination } => {
            println!(
                "{}",
                format!(
                    "Signed in as {} ({})",
                    user.username,
                    user.role.as_deref().unwrap_or("no role")
                )
                .green()
            );
            println!("{}", format!("Next: dca open {}", destination).bright_black());
            Ok(())
        }
        LoginState::Failed { message } => bail!("{}", message),
        state => bail!("Unexpected login state: {:?}", state),
    }
}

/// `dca logout`.
pub fn logout(ctx: &AppContext) {
    ctx.console.logout();
    println!("{}", "Signed out.".green());
}

/// `dca whoami`.
pub fn whoami(ctx: &AppContext) {
    match ctx.console.session() {
        Some(session) => println!(
            "{} ({})",
            session.user.username.bold(),
            session.user.role.as_deref().unwrap_or("no role")
        ),
        None => crate::render::print_login_hint(),
    }
}
