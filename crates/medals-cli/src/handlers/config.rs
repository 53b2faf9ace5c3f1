use anyhow::Result;
use medals_runtime::Config;

use crate::ConfigCommand;
use crate::context::ExecutionContext;
use crate::presentation::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &ExecutionContext) -> Result<()> {
    let config_path = ctx.config_path();
    let config_exists = config_path.exists();

    let view = ConfigViewModel {
        data_dir: ctx.data_dir().to_path_buf(),
        config_exists,
        config_path,
        base_url: ctx.base_url(),
        timeout_secs: ctx.config.api.timeout_secs,
        appearance: ctx.config.ui.appearance,
    };

    let mut result = CommandResultViewModel::new(view);
    if !config_exists {
        result = result
            .with_suggestion(Guidance::new("Write the defaults to disk").with_command("medals config init"));
    }
    ctx.renderer().render(result)
}

fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();
    let written = force || !config_path.exists();

    if written {
        // Writes the defaults, not the flag/env overrides in effect for this run.
        Config::default().save_to(&config_path)?;
    }

    let badge = if written {
        StatusBadge::success("Config written")
    } else {
        StatusBadge::warning("Config left unchanged")
    };

    ctx.renderer().render(
        CommandResultViewModel::new(ConfigInitViewModel {
            config_path,
            written,
        })
        .with_badge(badge),
    )
}
