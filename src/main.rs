use clap::Parser;
use colorcraft::cli::{Cli, Commands};
use colorcraft::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Palette(args) => colorcraft::cli::palette::run(args, &printer)?,
        Commands::Pattern(args) => colorcraft::cli::pattern::run(args, &printer)?,
        Commands::Splatter(args) => colorcraft::cli::splatter::run(args, &printer)?,
        Commands::Gradient(args) => colorcraft::cli::gradient::run(args, &printer)?,
        Commands::Build(args) => colorcraft::cli::build::run(args, &printer)?,
        Commands::Init(args) => colorcraft::cli::init::run(args, &printer)?,
        Commands::Validate(args) => colorcraft::cli::validate::run(args, &printer)?,
        Commands::List(args) => colorcraft::cli::list::run(args, &printer)?,
        Commands::Completions(args) => colorcraft::cli::completions::run(args)?,
    }

    Ok(())
}
