use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use nametag::render::raster::{self, RasterError, RasterOptions};
use nametag::render::{ConfigSources, Generator, HeadlessError, Slot, TemplateDocument};
use nametag::{GeneratorConfig, RequestDraft};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("JSON error in `{path}`: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Request(#[from] nametag::Error),
    #[error("request #{index}: {source}")]
    InvalidDraft { index: usize, source: nametag::Error },
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        let request_error = match self {
            Self::Request(err) | Self::InvalidDraft { source: err, .. } => err.is_request_error(),
            Self::Headless(err) | Self::Raster(RasterError::Headless(err)) => {
                err.is_request_error()
            }
            _ => false,
        };
        if request_error { 2 } else { 1 }
    }
}

type Result<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "nametag-cli", version, about = "Generate SVG name tags")]
struct Cli {
    /// Generator config (JSON). Relative paths inside it resolve against its directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one name tag.
    Generate(GenerateArgs),
    /// Generate every request of a JSON array into `<id>.svg` files.
    Batch(BatchArgs),
    /// Print the available color maps.
    Colormaps,
    /// Print the available templates and the slots they support.
    Templates,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    pronouns: Option<String>,

    /// Background color (6 hex digits), replacing the color map lookup.
    #[arg(long)]
    default_color: Option<String>,

    /// Key fingerprint (hex) drawn as a strip of colored blocks.
    #[arg(long)]
    fingerprint: Option<String>,

    /// Use the gradient template with a name-derived gradient.
    #[arg(long)]
    gradient: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Raster scale (png only).
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Raster background color (png only), e.g. `white` or `#ffffff`.
    #[arg(long)]
    background: Option<String>,

    /// Output file. SVG goes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON array of requests (`name`, `pronouns`, `default_color`, `fingerprint`, `gradient`).
    input: PathBuf,

    /// Output directory (defaults to the config's `out_dir`).
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Pdf,
}

#[derive(Serialize)]
struct TagEntry {
    id: u64,
    name: String,
    pronouns: String,
    file: String,
}

#[derive(Serialize)]
struct TemplateEntry {
    name: &'static str,
    gradient: bool,
    slots: Vec<&'static str>,
}

impl TemplateEntry {
    fn new(name: &'static str, template: &TemplateDocument) -> Self {
        Self {
            name,
            gradient: template.has_gradient(),
            slots: template.slots().iter().map(Slot::as_str).collect(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to install logger: {err}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, generator) = load(cli.config.as_deref())?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&generator, args),
        Command::Batch(args) => cmd_batch(&generator, &config, args),
        Command::Colormaps => cmd_colormaps(&generator),
        Command::Templates => cmd_templates(&generator),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load(config_path: Option<&Path>) -> Result<(GeneratorConfig, Generator)> {
    let Some(config_path) = config_path else {
        return Ok((GeneratorConfig::default(), Generator::new()));
    };

    let config = GeneratorConfig::from_json_str(&read(config_path)?)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    let resolve = |p: &Path| -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            base.join(p)
        }
    };

    let color_map = config.color_map.as_deref().map(|p| read(&resolve(p))).transpose()?;
    let template = config.template.as_deref().map(|p| read(&resolve(p))).transpose()?;
    let gradient_template = config
        .gradient_template
        .as_deref()
        .map(|p| read(&resolve(p)))
        .transpose()?;

    let generator = Generator::from_config(
        &config,
        ConfigSources {
            color_map: color_map.as_deref(),
            template: template.as_deref(),
            gradient_template: gradient_template.as_deref(),
        },
    )?;
    tracing::info!(config = %config_path.display(), "loaded generator config");

    let config = GeneratorConfig {
        out_dir: resolve(&config.out_dir),
        ..config
    };
    Ok((config, generator))
}

fn cmd_generate(generator: &Generator, args: GenerateArgs) -> Result<()> {
    let draft = RequestDraft {
        name: args.name,
        pronouns: args.pronouns,
        default_color: args.default_color,
        fingerprint: args.fingerprint,
        gradient: Some(args.gradient.to_string()),
    };
    let request = draft.validate()?;

    let bytes = match args.format {
        Format::Svg => generator.generate_sync(&request)?.into_string().into_bytes(),
        Format::Png => {
            if !(args.scale.is_finite() && args.scale > 0.0) {
                return Err(CliError::Usage("--scale must be a positive number"));
            }
            let options = RasterOptions {
                scale: args.scale,
                background: args.background,
            };
            raster::render_png_sync(generator, &request, &options)?
        }
        Format::Pdf => raster::render_pdf_sync(generator, &request)?,
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| CliError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            write(&out, &bytes)?;
            tracing::info!(out = %out.display(), bytes = bytes.len(), "wrote name tag");
        }
        None if args.format == Format::Svg => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
        None => return Err(CliError::Usage("binary formats (png, pdf) require --out")),
    }
    Ok(())
}

fn cmd_batch(generator: &Generator, config: &GeneratorConfig, args: BatchArgs) -> Result<()> {
    let text = read(&args.input)?;
    let drafts: Vec<RequestDraft> =
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: args.input.clone(),
            source,
        })?;

    // Validate everything before the first file is written.
    let requests = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| CliError::InvalidDraft { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    let out_dir = args.out_dir.as_deref().unwrap_or(&config.out_dir);
    std::fs::create_dir_all(out_dir).map_err(|source| CliError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut id = last_id(out_dir)?;
    let mut listing = Vec::with_capacity(requests.len());
    for request in &requests {
        id = id
            .checked_add(1)
            .ok_or(CliError::Usage("output directory has no tag ids left"))?;
        let artifact = generator.generate_sync(request)?;
        let file = out_dir.join(format!("{id}.svg"));
        write(&file, artifact.as_bytes())?;
        tracing::info!(id, file = %file.display(), "generated name tag");
        listing.push(TagEntry {
            id,
            name: request.name().to_string(),
            pronouns: request.pronouns().to_string(),
            file: file.display().to_string(),
        });
    }

    print_json(&listing)
}

/// Highest `<n>.svg` id already present in `dir` (0 when none).
fn last_id(dir: &Path) -> Result<u64> {
    let entries = std::fs::read_dir(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut last = 0;
    for entry in entries {
        let path = entry
            .map_err(|source| CliError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }
        if let Some(id) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u64>().ok())
        {
            last = last.max(id);
        }
    }
    Ok(last)
}

fn cmd_colormaps(generator: &Generator) -> Result<()> {
    print_json(&serde_json::json!([{
        "label": "default",
        "default_color": generator.colors.default_color(),
        "mappings": generator.colors.mappings(),
    }]))
}

fn cmd_templates(generator: &Generator) -> Result<()> {
    print_json(&[
        TemplateEntry::new("plain", &generator.plain),
        TemplateEntry::new("gradient", &generator.gradient),
    ])
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| CliError::Json {
        path: PathBuf::from("<stdout>"),
        source,
    })?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
