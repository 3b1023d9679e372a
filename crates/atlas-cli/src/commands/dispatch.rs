use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed content command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(args, ctx, flags),
        Commands::Show(args) => commands::show::handle(args, ctx, flags),
        Commands::Categories => commands::categories::handle(ctx, flags),
        Commands::Validate => commands::validate::handle(ctx, flags),
        Commands::Markup(args) => commands::markup::handle(args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
