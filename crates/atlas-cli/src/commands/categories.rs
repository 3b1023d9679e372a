use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas categories`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.registry.categories(), flags.format)
}
