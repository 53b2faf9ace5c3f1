use std::sync::mpsc;

use anyhow::Result;
use is_terminal::IsTerminal;
use medals_runtime::MedalController;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The medal board needs an interactive terminal. Try 'medals list' instead.");
    }

    let (tx, rx) = mpsc::channel();
    let controller = MedalController::new(ctx.client()?, tx);

    tracing::info!(base_url = %ctx.base_url(), "starting medal board");
    TuiRenderer::new(ctx.config.ui.appearance)
        .run(controller, rx)
        .await
}
