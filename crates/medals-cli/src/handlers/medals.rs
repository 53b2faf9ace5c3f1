use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::{CommandResultViewModel, MedalCatalogViewModel};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    ctx.renderer()
        .render(CommandResultViewModel::new(MedalCatalogViewModel::new()))
}
