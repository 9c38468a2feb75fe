use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{info, Level};

use transatlantic::reader::{AsyncLineReader, ReaderConfig};
use transatlantic::{Direction, DictionarySet, DictionaryStore, Translator, TranslatorConfig};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Translated text with changed spans highlighted
    Markup,
    /// Translated text only
    Plain,
    /// JSON with translatedText and translatedSpans
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "transatlantic")]
#[command(about = "Translate between American and British English, highlighting every change")]
#[command(version)]
struct Args {
    /// Text to translate; read from stdin when omitted
    text: Vec<String>,

    /// Translation direction: american-to-british or british-to-american
    #[arg(short, long, default_value = "american-to-british")]
    direction: Direction,

    /// Translate each line of this file instead of TEXT
    #[arg(long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markup)]
    format: OutputFormat,

    /// TOML file with translator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file with extra dictionary entries merged over the built-in ones
    #[arg(long)]
    dictionaries: Option<PathBuf>,

    /// Abort batch translation on the first read error
    #[arg(long)]
    fail_fast: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries translations, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let translator = build_translator(args.config.as_deref(), args.dictionaries.as_deref()).await?;

    if let Some(input) = &args.input {
        return translate_batch(&translator, input, &args).await;
    }

    let text = if args.text.is_empty() {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read text from stdin")?;
        buffer
    } else {
        args.text.join(" ")
    };

    let rendered = translator.present(text.trim_end_matches(['\r', '\n']), args.direction)?;
    match args.format {
        OutputFormat::Markup => println!("{}", rendered.markup),
        OutputFormat::Plain => println!("{}", rendered.result.translated_text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered.result)?),
    }

    Ok(())
}

async fn build_translator(
    config_path: Option<&Path>,
    dictionaries_path: Option<&Path>,
) -> Result<Translator> {
    let config = match config_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            TranslatorConfig::from_toml_str(&source)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => TranslatorConfig::default(),
    };

    let translator = match dictionaries_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
            let extra = DictionarySet::from_toml_str(&source)
                .with_context(|| format!("Invalid dictionary file {}", path.display()))?;
            let store = DictionaryStore::new(DictionarySet::builtin().extended(&extra));
            Translator::new(&store, config)?
        }
        None => Translator::new(DictionaryStore::builtin(), config)?,
    };

    info!(config = ?translator.config(), "Translator ready");
    Ok(translator)
}

async fn translate_batch(translator: &Translator, input: &Path, args: &Args) -> Result<()> {
    let reader_config = ReaderConfig {
        fail_fast: args.fail_fast,
        ..ReaderConfig::default()
    };
    let reader = AsyncLineReader::new(reader_config, translator);
    let (lines, stats) = reader.translate_file(input, args.direction).await?;

    for line in &lines {
        match args.format {
            OutputFormat::Markup => println!("{}", translator.highlighter().render(&line.result)),
            OutputFormat::Plain => println!("{}", line.result.translated_text),
            OutputFormat::Json => println!("{}", serde_json::to_string(line)?),
        }
    }

    info!(?stats, "Batch translation complete");
    if let Some(error) = stats.read_error {
        anyhow::bail!(error);
    }
    Ok(())
}
