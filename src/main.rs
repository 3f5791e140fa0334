use seymour_bookmarklet::generate::{self, GenerateOptions};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seymour-bookmarklet")]
#[command(about = "Bookmarklet installer page generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a script into a javascript: bookmarklet and write its install page.
    Generate {
        #[arg(long, default_value = generate::DEFAULT_INPUT)]
        input: PathBuf,

        #[arg(short = 'o', long, default_value = generate::DEFAULT_OUTPUT)]
        out: PathBuf,

        /// Link text and page title.
        #[arg(long, default_value = generate::DEFAULT_NAME)]
        name: String,

        /// Print the summary as a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate {
            input,
            out,
            name,
            json,
        } => {
            let summary = generate::generate(&GenerateOptions {
                input,
                output: out,
                name,
            })?;

            if json {
                println!("{}", summary.to_json()?);
            } else {
                for line in summary.lines() {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
