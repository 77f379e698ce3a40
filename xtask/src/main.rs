//! xtask: Development tasks for cdp-stubs
//!
//! Run with: `cargo xtask <command>`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cdp_codegen::{CodegenOptions, OutputDir, Target};
use cdp_schema::Filter;
use facet::Facet;
use facet_args as args;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xshell::{Shell, cmd};

/// Development tasks for cdp-stubs
#[derive(Facet)]
struct Cli {
    #[facet(args::subcommand)]
    command: Commands,
}

#[derive(Facet)]
#[repr(u8)]
enum Commands {
    /// Run all CI checks locally (test, clippy, fmt, doc)
    Ci,
    /// Run all tests (workspace)
    Test,
    /// Run clippy on all code
    Clippy,
    /// Check formatting
    Fmt {
        /// Fix formatting issues instead of just checking
        #[facet(args::named, default)]
        fix: bool,
    },
    /// Build documentation with warnings as errors
    Doc,
    /// Generate client stubs from protocol JSON files
    Codegen {
        /// Comma-separated protocol files, merged in order
        #[facet(args::named)]
        schema: String,
        /// Output directory (wiped before writing)
        #[facet(args::named, default)]
        out: Option<String>,
        /// Generate TypeScript (into `<out>/typescript` when both targets run)
        #[facet(args::named, default)]
        typescript: bool,
        /// Generate Rust (into `<out>/rust` when both targets run)
        #[facet(args::named, default)]
        rust: bool,
        /// Name of the aggregator class / struct
        #[facet(args::named, default)]
        facade_name: Option<String>,
        /// Module the TypeScript transport type is imported from
        #[facet(args::named, default)]
        transport_module: Option<String>,
        /// Name of the TypeScript transport type
        #[facet(args::named, default)]
        transport_type: Option<String>,
        /// Path of the session runtime crate used by generated Rust
        #[facet(args::named, default)]
        runtime_crate: Option<String>,
        /// Leave out experimental commands and events
        #[facet(args::named, default)]
        skip_experimental: bool,
        /// Leave out deprecated commands and events
        #[facet(args::named, default)]
        skip_deprecated: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn workspace_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()?.join("xtask"),
    };
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "xtask manifest directory has no parent".into())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli: Cli = args::from_std_args()?;
    let sh = Shell::new()?;

    let workspace_root = workspace_root()?;
    sh.change_dir(&workspace_root);

    match cli.command {
        Commands::Test => {
            println!("\n=== Running workspace tests ===");

            // Try nextest first, fall back to cargo test
            if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
                println!("Using cargo-nextest");
                cmd!(sh, "cargo nextest run --workspace").run()?;
            } else {
                println!("cargo-nextest not found, using cargo test");
                cmd!(sh, "cargo test --workspace").run()?;
            }

            println!("\n=== All tests passed ===");
        }
        Commands::Clippy => {
            println!("=== Running clippy ===");
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
        }
        Commands::Fmt { fix } => {
            if fix {
                println!("=== Fixing formatting ===");
                cmd!(sh, "cargo fmt --all").run()?;
            } else {
                println!("=== Checking formatting ===");
                cmd!(sh, "cargo fmt --all -- --check").run()?;
            }
        }
        Commands::Ci => {
            println!("=== Running all CI checks ===\n");

            for task in ["test", "clippy", "fmt", "doc"] {
                println!("\n>>> cargo xtask {task}");
                cmd!(sh, "cargo xtask {task}").run()?;
            }

            println!("\n=== All CI checks passed ===");
        }
        Commands::Doc => {
            println!("=== Building documentation with warnings as errors ===");
            cmd!(sh, "cargo doc --no-deps")
                .env("RUSTDOCFLAGS", "-D warnings")
                .run()?;
            println!("\n=== Documentation built successfully ===");
        }
        Commands::Codegen {
            schema,
            out,
            typescript,
            rust,
            facade_name,
            transport_module,
            transport_type,
            runtime_crate,
            skip_experimental,
            skip_deprecated,
        } => {
            let schemas: Vec<PathBuf> = schema
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| workspace_root.join(s))
                .collect();
            if schemas.is_empty() {
                return Err("--schema needs at least one protocol file".into());
            }
            let document = cdp_schema::load_files(&schemas)?;

            let defaults = CodegenOptions::default();
            let base = CodegenOptions {
                target: defaults.target,
                facade_name: facade_name.unwrap_or(defaults.facade_name),
                transport_module: transport_module.unwrap_or(defaults.transport_module),
                transport_type: transport_type.unwrap_or(defaults.transport_type),
                runtime_crate: runtime_crate.unwrap_or(defaults.runtime_crate),
                filter: Filter {
                    skip_experimental,
                    skip_deprecated,
                },
            };

            let out = workspace_root.join(out.as_deref().unwrap_or("generated"));
            // A single target writes straight into `out`.
            match (typescript, rust) {
                (true, false) => codegen(&document, Target::TypeScript, &base, &out)?,
                (false, true) => codegen(&document, Target::Rust, &base, &out)?,
                _ => {
                    codegen(&document, Target::TypeScript, &base, &out.join("typescript"))?;
                    codegen(&document, Target::Rust, &base, &out.join("rust"))?;
                }
            }
        }
    }

    Ok(())
}

fn codegen(
    document: &cdp_schema::ProtocolDocument,
    target: Target,
    base: &CodegenOptions,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = CodegenOptions {
        target,
        ..base.clone()
    };
    let files = cdp_codegen::generate(document, &options)?;
    OutputDir::clean(out_dir)?.write_all(&files)?;
    info!(
        language = ?target,
        files = files.len(),
        path = %out_dir.display(),
        "generation finished"
    );
    Ok(())
}
