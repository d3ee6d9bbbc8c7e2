use std::io::Write;

use crate::pipeline::PipelineArgs;

/// Args for the parse command.
#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

impl ParseArgs {
    /// Run the parse command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let batch = self.pipeline.load_utterances(None)?;
        let mut writer = self.pipeline.output.open_writer()?;

        for utterance in &batch {
            let snapshot = utterance.snapshot();
            if self.pretty {
                serde_json::to_writer_pretty(&mut writer, &snapshot)?;
            } else {
                serde_json::to_writer(&mut writer, &snapshot)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}
