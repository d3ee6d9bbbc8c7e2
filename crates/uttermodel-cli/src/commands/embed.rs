use std::io::Write;

use crate::pipeline::PipelineArgs;

/// Args for the embed command.
#[derive(clap::Args, Debug)]
pub struct EmbedArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,
}

impl EmbedArgs {
    /// Run the embed command.
    ///
    /// Writes one ``{"text": .., "embedding": [..]}`` JSON object per utterance.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let batch = self.pipeline.load_utterances(None)?;
        let mut writer = self.pipeline.output.open_writer()?;

        for utterance in &batch {
            let record = serde_json::json!({
                "text": utterance.to_string(),
                "embedding": utterance.sentence_embedding(),
            });
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}
