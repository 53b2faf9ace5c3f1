use anyhow::Result;
use medals_runtime::{DeleteOutcome, MedalController};
use medals_types::CountryId;

use crate::context::ExecutionContext;
use crate::presentation::{
    CommandResultViewModel, ConsoleNotifier, DeleteResultViewModel, StatusBadge,
};

pub async fn handle(ctx: &ExecutionContext, id: CountryId) -> Result<()> {
    let mut controller = MedalController::new(ctx.client()?, ConsoleNotifier);
    controller.load().await?;

    let name = controller.find(id).map(|c| c.name.clone());
    let outcome = controller.delete(id).await;

    // The alert has already been written to stderr by the notifier.
    if outcome == DeleteOutcome::RolledBack {
        anyhow::bail!("Delete of country {} failed", id);
    }

    let badge = match outcome {
        DeleteOutcome::Deleted => StatusBadge::success("Country deleted"),
        _ => StatusBadge::info("Nothing to delete"),
    };

    ctx.renderer().render(
        CommandResultViewModel::new(DeleteResultViewModel {
            id,
            name,
            status: outcome.into(),
            remaining: controller.countries().len(),
            total: controller.total(),
        })
        .with_badge(badge),
    )
}
