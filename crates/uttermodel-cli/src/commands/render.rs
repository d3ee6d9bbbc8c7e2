use std::io::Write;

use uttermodel::utterance::{EntityStringMode, SlotStringMode, UtteranceToStringOptions};

use crate::pipeline::PipelineArgs;

/// Args for the render command.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Slot handling: "keep-value", "keep-name" or "ignore".
    #[arg(long, default_value_t = SlotStringMode::KeepValue)]
    slots: SlotStringMode,

    /// Entity handling: "keep-default", "keep-value", "keep-name" or "ignore".
    #[arg(long, default_value_t = EntityStringMode::Ignore)]
    entities: EntityStringMode,

    /// Lowercase the output.
    #[arg(long)]
    lower_case: bool,

    /// Keep only words and slot values.
    #[arg(long)]
    only_words: bool,
}

impl RenderArgs {
    /// Run the render command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let batch = self.pipeline.load_utterances(None)?;
        let mut writer = self.pipeline.output.open_writer()?;

        let options = UtteranceToStringOptions::default()
            .with_slots(self.slots)
            .with_entities(self.entities)
            .with_lower_case(self.lower_case)
            .with_only_words(self.only_words);

        for utterance in &batch {
            writeln!(writer, "{}", utterance.to_string_with(&options))?;
        }
        writer.flush()?;

        Ok(())
    }
}
