use super::ViewContext;
use crate::config::ModeConfig;
use crate::model::{palette, Label, ModeName, OptionSource, ViewOption};

/// Sort key used when the label mode does not name one.
pub const DEFAULT_SORT_KEY: &str = "count";

/// Build the label catalog: one option per known label, counted by name.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let options = ctx
        .labels
        .iter()
        .filter(|label| !config.excludes(&label.id, &label.name))
        .map(|label| label_option(ctx, label))
        .collect();

    ctx.finish(options, config, Some(DEFAULT_SORT_KEY))
}

fn label_option(ctx: &ViewContext, label: &Label) -> ViewOption {
    ViewOption::new(ModeName::Label, &label.id, &label.name)
        .with_icon("tag")
        .with_color(palette::hex(&label.color))
        .with_count(ctx.count(|task| task.has_label(&label.name)))
        .with_source(OptionSource::Label(label.clone()))
}
