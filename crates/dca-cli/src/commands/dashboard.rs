use crate::context::AppContext;
use crate::render;
use anyhow::Result;
use colored::Colorize;
use dca_core::case::PriorityFilter;
use dca_core::route::Route;

/// `dca open`, `dca admin` and `dca agent`.
pub async fn open(ctx: &AppContext, route: Route, filter: PriorityFilter) -> Result<()> {
    let Some(mut opened) = super::navigate(&ctx.console, route).await? else {
        println!("{}", "Cancelled.".yellow());
        return Ok(());
    };

    render::print_redirect(route, &opened);
    opened.screen.set_filter(filter);
    render::print_opened(&opened);
    Ok(())
}
