use clap::{Parser, Subcommand};
use figo_codegen::{CodegenOptions, CompilerOutput, DEFAULT_MAX_DEPTH};
use figo_parser::{File, Variables};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figo")]
#[command(about = "figo: design document to CSS token and component generator")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate tokens.css, components.css and components.html
    Build {
        /// Design document JSON (file endpoint response)
        path: String,

        /// Variable registry JSON (local variables endpoint response)
        #[arg(long)]
        variables: Option<String>,

        /// Output directory [default: the document's directory]
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Prefix for component element names
        #[arg(long)]
        prefix: Option<String>,

        /// Maximum document nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Parse and generate without writing output
    Check {
        /// Design document JSON
        path: String,

        /// Variable registry JSON
        #[arg(long)]
        variables: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            variables,
            out_dir,
            prefix,
            max_depth,
        } => {
            let mut options = CodegenOptions::new().max_depth(max_depth);
            if let Some(prefix) = prefix {
                options = options.prefix(prefix);
            }
            cmd_build(&path, variables.as_deref(), out_dir, &options);
        }
        Command::Check { path, variables } => cmd_check(&path, variables.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_document(path: &str) -> File {
    match figo_parser::parse_document(&read_source(path)) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_variables(path: Option<&str>) -> Option<Variables> {
    let path = path?;
    match figo_parser::parse_variables(&read_source(path)) {
        Ok(variables) => Some(variables),
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn compile(path: &str, variables: Option<&str>, options: &CodegenOptions) -> CompilerOutput {
    let file = load_document(path);
    let variables = load_variables(variables);

    match figo_codegen::compile(&file, variables.as_ref(), options) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str, variables: Option<&str>, out_dir: Option<PathBuf>, options: &CodegenOptions) {
    let output = compile(path, variables, options);

    // Write next to the document unless told otherwise
    let dir = out_dir.unwrap_or_else(|| {
        Path::new(path)
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    });
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error creating {}: {e}", dir.display());
        std::process::exit(1);
    }

    tracing::debug!(dir = %dir.display(), "writing output");

    let files = [
        ("tokens.css", &output.tokens_css),
        ("components.css", &output.components_css),
        ("components.html", &output.html),
    ];
    for (name, contents) in files {
        let target = dir.join(name);
        if let Err(e) = std::fs::write(&target, contents) {
            eprintln!("Error writing {}: {e}", target.display());
            std::process::exit(1);
        }
        eprintln!("Built: {}", target.display());
    }
}

fn cmd_check(path: &str, variables: Option<&str>) {
    let output = compile(path, variables, &CodegenOptions::default());
    eprintln!(
        "OK: {path} ({} tokens, {} components)",
        output.tokens.len(),
        output.components.len()
    );
}
