use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::slug::lookup;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = lookup(&ctx.registry, &args.slug)?;
    output(topic, flags.format)
}
