use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
};

use uttermodel::{
    language::LanguageTools,
    types::TokenVectorMap,
    utterance::{AlternateOptions, get_alternate_utterance},
    vocab::ClosestTokenFinder,
};

use crate::pipeline::PipelineArgs;

/// Args for the alternate command.
#[derive(clap::Args, Debug)]
pub struct AlternateArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Vocabulary file, one word per line.
    #[arg(long)]
    vocab: String,

    /// Only substitute spelling neighbours.
    #[arg(long)]
    strict: bool,

    /// Minimum length (exclusive) of substituted words.
    #[arg(long, default_value_t = 3)]
    min_token_chars: usize,
}

impl AlternateArgs {
    fn load_vocab(&self) -> Result<TokenVectorMap, Box<dyn std::error::Error>> {
        let reader = BufReader::new(File::open(&self.vocab)?);
        let mut words = Vec::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.push(word);
            }
        }
        words.sort();
        words.dedup();

        let vectors = self
            .pipeline
            .tools()?
            .vectorize_tokens(&words, &self.pipeline.language)?;
        Ok(words.into_iter().zip(vectors).collect())
    }

    /// Run the alternate command.
    ///
    /// Writes the alternate of each utterance; utterances without one
    /// produce an empty line.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.load_vocab()?;
        let batch = self.pipeline.load_utterances(Some(&vocab))?;
        log::info!("Vocabulary: {} words", vocab.len());

        let finder = ClosestTokenFinder::default();
        let options = AlternateOptions::default()
            .with_strict(self.strict)
            .with_min_token_chars(self.min_token_chars);

        let mut writer = self.pipeline.output.open_writer()?;
        for utterance in &batch {
            match get_alternate_utterance(utterance, &vocab, &finder, &options)? {
                Some(alternate) => writeln!(writer, "{alternate}")?,
                None => writeln!(writer)?,
            }
        }
        writer.flush()?;

        Ok(())
    }
}
