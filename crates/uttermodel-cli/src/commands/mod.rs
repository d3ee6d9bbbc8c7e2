mod alternate;
mod embed;
mod parse;
mod render;

/// Subcommands for uttermodel
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build utterances and print them as JSON lines.
    Parse(parse::ParseArgs),

    /// Build utterances and print their text renderings.
    Render(render::RenderArgs),

    /// Build utterances and print their sentence embeddings.
    Embed(embed::EmbedArgs),

    /// Print out-of-vocabulary alternates of each utterance.
    Alternate(alternate::AlternateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Parse(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::Embed(cmd) => cmd.run(),
            Commands::Alternate(cmd) => cmd.run(),
        }
    }
}
