//! Command line driver for the name encoder.
//!
//! Usage:
//!     soundmatch names.txt
//!     soundmatch names.txt --format json --unlimited
//!     soundmatch names.txt --group
//!     soundmatch --self-check

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use soundmatch_encoder::{sounds_like, EncoderConfig, Sound};
use soundmatch_matcher::{MatcherConfig, PhoneticIndex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soundmatch")]
#[command(about = "Encode names with Double Metaphone")]
struct Cli {
    /// File with one name per line
    path: Option<PathBuf>,

    /// Do not cap codes at four characters
    #[arg(long)]
    unlimited: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Print sound-alike groups instead of one code per name
    #[arg(long)]
    group: bool,

    /// Run the built-in matching scenarios
    #[arg(long)]
    self_check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(format: &str) -> Result<Self> {
        match format {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("Unknown output format: {other} (expected text or json)"),
        }
    }
}

/// One input line with its encoding.
#[derive(Debug, Clone)]
struct NameLine {
    name: String,
    sound: Sound,
}

#[derive(Debug, Serialize)]
struct EncodedName<'a> {
    name: &'a str,
    primary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternate: Option<&'a str>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soundmatch_cli=info")),
        )
        .init();

    let cli = Cli::parse();

    if missing_input(&cli) {
        eprintln!("USAGE: soundmatch <PATH>");
        std::process::exit(1);
    }

    let format = OutputFormat::parse(&cli.format)?;
    let config = EncoderConfig {
        limit_length: !cli.unlimited,
    };

    if let Some(path) = &cli.path {
        run_encode(path, config, format, cli.group)?;
    }

    if cli.self_check {
        run_self_check();
    }

    Ok(())
}

/// Neither a names file nor the self-check was asked for.
fn missing_input(cli: &Cli) -> bool {
    cli.path.is_none() && !cli.self_check
}

fn run_encode(path: &Path, config: EncoderConfig, format: OutputFormat, group: bool) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = parse_lines(&bytes, config);

    tracing::info!(path = %path.display(), names = lines.len(), "encoded names");

    let output = if group {
        render_groups(&lines, config, format)?
    } else {
        match format {
            OutputFormat::Text => render_text(&lines),
            OutputFormat::Json => render_json(&lines)?,
        }
    };

    print!("{output}");
    Ok(())
}

fn run_self_check() {
    let failures = self_check();

    if failures.is_empty() {
        tracing::info!("self-check passed");
        return;
    }

    for failure in &failures {
        eprintln!("self-check failed: {failure}");
    }
    std::process::exit(1);
}

/// Split file contents into names and encode each one.
///
/// A final newline does not produce an empty name. Lines that are not
/// valid UTF-8 are read as ISO-8859-1.
fn parse_lines(bytes: &[u8], config: EncoderConfig) -> Vec<NameLine> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if bytes.is_empty() {
        return Vec::new();
    }

    bytes.split(|&b| b == b'\n').map(|line| encode_line(line, config)).collect()
}

fn encode_line(line: &[u8], config: EncoderConfig) -> NameLine {
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    match std::str::from_utf8(line) {
        Ok(text) => NameLine {
            name: text.to_string(),
            sound: Sound::with_config(text, config),
        },
        Err(_) => NameLine {
            name: line.iter().copied().map(char::from).collect(),
            sound: Sound::from_latin1(line, config),
        },
    }
}

fn render_text(lines: &[NameLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{},{}\n", line.name, line.sound))
        .collect()
}

fn render_json(lines: &[NameLine]) -> Result<String> {
    let encoded: Vec<EncodedName<'_>> = lines
        .iter()
        .map(|line| EncodedName {
            name: &line.name,
            primary: line.sound.primary(),
            alternate: line.sound.has_alternate().then(|| line.sound.alternate()),
        })
        .collect();

    Ok(format!("{}\n", serde_json::to_string_pretty(&encoded)?))
}

fn render_groups(lines: &[NameLine], config: EncoderConfig, format: OutputFormat) -> Result<String> {
    let index = PhoneticIndex::from_names(
        lines.iter().map(|line| line.name.clone()),
        MatcherConfig { encoder: config },
    );
    let groups = index.groups();

    Ok(match format {
        OutputFormat::Text => groups
            .iter()
            .map(|group| format!("{},{}\n", group.code, group.members.join(";")))
            .collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&groups)?),
    })
}

/// Known pairs and whether they should sound alike. Returns a message for
/// every pair that disagrees.
fn self_check() -> Vec<String> {
    let config = EncoderConfig::default();
    let wide = |text: &str| -> Sound {
        let units: Vec<u16> = text.encode_utf16().collect();
        Sound::from_wide(&units, config)
    };

    let checks = [
        ("bacher", "packer", true, sounds_like("bacher", "packer", config)),
        ("ivan", "bacher", false, sounds_like("ivan", "bacher", config)),
        ("ivan", "evan", true, Sound::new("ivan").sounds_like(&Sound::new("evan"))),
        ("evan", "ivan", true, sounds_like("evan", "ivan", config)),
        ("before", "after", false, sounds_like("before", "after", config)),
        ("monday", "tuesday", false, sounds_like("monday", "tuesday", config)),
        ("wide monday", "wide tuesday", false, wide("monday").sounds_like(&wide("tuesday"))),
        ("wide plated", "wide blotted", true, wide("plated").sounds_like(&wide("blotted"))),
        (
            "wide antidisestablishmentarianism",
            "supercalifragilisticexpialidocious",
            false,
            wide("antidisestablishmentarianism").sounds_like_text("supercalifragilisticexpialidocious"),
        ),
    ];

    checks
        .iter()
        .filter(|(_, _, expected, actual)| expected != actual)
        .map(|(lhs, rhs, expected, _)| {
            if *expected {
                format!("{lhs} and {rhs} don't sound the same")
            } else {
                format!("{lhs} sounds like {rhs}")
            }
        })
        .collect()
}
