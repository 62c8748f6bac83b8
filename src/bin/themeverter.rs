use std::io::{BufRead as _, IsTerminal as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use themeverter::{
    BuiltinTemplates, ConvertThreading, Pipeline, SchemeTemplate, SourceFormat, TargetFormat,
    TemplateRenderer as _,
};

#[derive(Parser, Debug)]
#[command(name = "themeverter", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a color scheme into one or more application formats.
    Convert(ConvertArgs),
    /// List supported source and target formats.
    Formats,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input scheme file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Source format; inferred from the file extension when omitted.
    #[arg(long)]
    from: Option<String>,

    /// Target format (repeatable).
    #[arg(long = "to", required = true)]
    to: Vec<String>,

    /// Directory for generated files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Scheme name to use when the source has none.
    #[arg(long)]
    name: Option<String>,

    /// Also write the canonical scheme as `<name>.canonical.json`.
    #[arg(long, default_value_t = false)]
    emit_canonical: bool,

    /// Format targets in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print rendered output instead of writing files.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Formats => {
            cmd_formats();
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_formats() {
    println!("sources:");
    for f in SourceFormat::ALL {
        println!("  {}", f.id());
    }
    println!("targets:");
    for t in TargetFormat::ALL {
        println!("  {:<12} .{}", t.id(), t.extension());
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let from = match &args.from {
        Some(id) => id.parse::<SourceFormat>()?,
        None => SourceFormat::detect(&args.in_path).with_context(|| {
            format!(
                "cannot infer source format of '{}'; pass --from",
                args.in_path.display()
            )
        })?,
    };
    let targets = args
        .to
        .iter()
        .map(|id| id.parse::<TargetFormat>())
        .collect::<Result<Vec<_>, _>>()?;

    let doc = themeverter::read_document(&args.in_path, from)?;

    let mut pipeline = Pipeline::new(SchemeTemplate {
        name: args.name.clone(),
        ..SchemeTemplate::default()
    })
    .with_threading(ConvertThreading {
        parallel: args.parallel,
        threads: args.threads,
    });
    if args.name.is_none() && std::io::stdin().is_terminal() {
        pipeline = pipeline.with_name_resolver(prompt_for_name);
    }

    let (scheme, records) = pipeline.convert_many(&doc, from, &targets)?;
    let stem = file_stem(&scheme.name);

    if !args.stdout {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    }

    if args.emit_canonical {
        let json = serde_json::to_string_pretty(&scheme).context("serialize canonical scheme")?;
        emit(&args, &args.out_dir.join(format!("{stem}.canonical.json")), &json)?;
    }

    for record in &records {
        let target = record.target();
        let text = BuiltinTemplates.render(target, record)?;
        let path = args.out_dir.join(format!("{stem}.{}", target.extension()));
        emit(&args, &path, &text)?;
    }
    Ok(())
}

fn emit(args: &ConvertArgs, path: &Path, text: &str) -> anyhow::Result<()> {
    if args.stdout {
        let mut out = std::io::stdout().lock();
        writeln!(out, "==> {} <==", path.display())?;
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

/// Ask on the terminal for a scheme name; an empty answer declines.
fn prompt_for_name(origin: Option<&Path>) -> Option<String> {
    match origin {
        Some(p) => eprint!("Scheme name for {}: ", p.display()),
        None => eprint!("Scheme name: "),
    }
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok()?;
    let name = line.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Scheme name made safe for use as a file name.
fn file_stem(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
