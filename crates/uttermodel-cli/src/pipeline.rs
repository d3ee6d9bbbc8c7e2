use uttermodel::{
    language::{DEFAULT_WHITESPACE_DIMS, WhitespaceTools},
    types::TokenVectorMap,
    utterance::{BatchOptions, Utterance, build_utterance_batch},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Shared utterance pipeline args.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// Language code of the input.
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Vector dimensionality of the built-in vectorizer.
    #[arg(long, default_value_t = DEFAULT_WHITESPACE_DIMS)]
    pub dims: usize,

    /// Build utterances in parallel.
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub logging: LogArgs,
}

impl PipelineArgs {
    /// The language tools.
    pub fn tools(&self) -> Result<WhitespaceTools, Box<dyn std::error::Error>> {
        if self.dims == 0 {
            return Err("--dims must be positive".into());
        }
        Ok(WhitespaceTools::new(self.dims))
    }

    /// Set up logging, then build utterances from the input lines.
    pub fn load_utterances(
        &self,
        vocab: Option<&TokenVectorMap>,
    ) -> Result<Vec<Utterance>, Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let lines = self.input.read_lines()?;
        log::info!("Read {} lines", lines.len());

        let tools = self.tools()?;
        let options = BatchOptions::default().with_parallel(self.parallel);
        let batch = build_utterance_batch(&lines, &self.language, &tools, vocab, &options)?;
        log::info!("Built {} utterances", batch.len());

        Ok(batch)
    }
}
