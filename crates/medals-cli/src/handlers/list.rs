use anyhow::Result;
use medals_runtime::MedalController;

use crate::context::ExecutionContext;
use crate::presentation::{BoardViewModel, CommandResultViewModel, Guidance};

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut controller = MedalController::new(ctx.client()?, Vec::new());
    controller.load().await?;

    let board = BoardViewModel::new(&controller.sorted(), controller.total());
    let mut result = CommandResultViewModel::new(board);
    if controller.countries().is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add the first country").with_command("medals add <NAME>"),
        );
    }

    ctx.renderer().render(result)
}
