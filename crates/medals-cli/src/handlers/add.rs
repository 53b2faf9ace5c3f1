use anyhow::Result;
use medals_runtime::MedalController;

use crate::context::ExecutionContext;
use crate::presentation::{
    AddResultViewModel, CommandResultViewModel, CountryRowViewModel, Guidance, StatusBadge,
};

pub async fn handle(
    ctx: &ExecutionContext,
    name: &str,
    gold: i64,
    silver: i64,
    bronze: i64,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Country name must not be empty");
    }

    let mut controller = MedalController::new(ctx.client()?, Vec::new());
    let created = controller.add(name, gold, silver, bronze).await?;

    let mut result = CommandResultViewModel::new(AddResultViewModel {
        country: CountryRowViewModel::from(&created),
    })
    .with_badge(StatusBadge::success("Country added"));

    if gold != 0 || silver != 0 || bronze != 0 {
        result = result.with_suggestion(Guidance::new(
            "New countries always start with zero medals; seed counts were not sent",
        ));
    }

    ctx.renderer().render(result)
}
