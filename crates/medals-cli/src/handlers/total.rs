use anyhow::Result;
use medals_runtime::MedalController;

use crate::context::ExecutionContext;
use crate::presentation::{CommandResultViewModel, TotalViewModel};

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut controller = MedalController::new(ctx.client()?, Vec::new());
    let countries = controller.load().await?;

    ctx.renderer()
        .render(CommandResultViewModel::new(TotalViewModel {
            total: controller.total(),
            countries,
        }))
}
