use clap::{Parser, Subcommand};
use folio::{config, generate, output, page};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio generator")]
#[command(long_about = "\
Single-page portfolio generator

Reads a developer profile from a TOML file and writes one self-contained
index.html (styles and script inlined). Every key is optional: anything the
file leaves out falls back to the stock portfolio.

Content structure:

  content.toml
  ├── [meta]          # lang, theme (dark | light), description
  ├── [profile]       # name, title_kicker, hero_phrases, subtitle, email,
  │                   # location, [[profile.socials]]
  ├── [about]         # summary, body (Markdown)
  ├── [[skills]]      # title, progress (0-100), tags
  ├── [[projects]]    # thumb, thumb_image, title, description, tags, demo, code
  └── [[timeline]]    # heading, meta, text

Lists replace the stock list as a whole; tables merge key by key.

Run 'folio gen-content' to print a documented content.toml.")]
#[command(version)]
struct Cli {
    /// Content file [default: content.toml, stock content if absent]
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and write it (the default)
    Build,
    /// Load and render the content without writing anything
    Check,
    /// Print a stock content.toml with all options documented
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let content = load_content(cli.content.as_deref())?;
            let result = generate::generate(&content, &cli.output)?;
            log::info!("{} bytes", result.bytes);
            output::print_build_output(&result.path);
        }
        Command::Check => {
            let path = cli
                .content
                .as_deref()
                .unwrap_or(Path::new(config::DEFAULT_CONTENT_FILE));
            println!("==> Checking {}", path.display());
            let content = load_content(cli.content.as_deref())?;
            page::render(&content)?;
            output::print_check_output(&content);
            println!("==> Content is valid");
        }
        Command::GenContent => {
            print!("{}", config::stock_content_toml());
        }
    }

    Ok(())
}

/// A named content file must exist; the implicit default may be missing.
fn load_content(named: Option<&Path>) -> Result<folio::content::SiteContent, config::ContentError> {
    match named {
        Some(path) => config::load_content(path),
        None => config::load_content_or_stock(Path::new(config::DEFAULT_CONTENT_FILE)),
    }
}
