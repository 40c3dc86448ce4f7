//! Development automation tasks for the `Cadence` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output goes straight to the terminal, so `println!` and `eprintln!` are
//! used instead of structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{bail, Context, Result};

mod features;

/// Where ts-rs writes the domain bindings, relative to the workspace root.
const BINDINGS_DIR: &str = "crates/domain/bindings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Ci,
    Fmt,
    Clippy,
    Test,
    TestFeatures,
    Codegen,
    Help,
}

impl Task {
    const ALL: [(&'static str, Self, &'static str); 7] = [
        ("ci", Self::Ci, "Run fmt, clippy, test and test-features in sequence"),
        ("fmt", Self::Fmt, "Check Rust code formatting"),
        ("clippy", Self::Clippy, "Run Clippy lints with warnings denied"),
        ("test", Self::Test, "Run all workspace tests"),
        (
            "test-features",
            Self::TestFeatures,
            "Verify every crate and feature combination compiles",
        ),
        ("codegen", Self::Codegen, "Export TypeScript bindings into crates/domain/bindings"),
        ("help", Self::Help, "Show this help message"),
    ];

    fn parse(name: Option<&str>) -> Option<Self> {
        match name {
            None => Some(Self::Help),
            Some(name) => {
                Self::ALL.iter().find(|(label, ..)| *label == name).map(|(_, task, _)| *task)
            }
        }
    }

    fn run(self) -> Result<()> {
        match self {
            Self::Ci => run_ci(),
            Self::Fmt => cargo(
                &["fmt", "--all", "--", "--check"],
                "Format check failed. Run 'cargo fmt --all' to fix.",
            ),
            Self::Clippy => cargo(
                &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
                "Clippy run failed. See output above.",
            ),
            Self::Test => cargo(&["test", "--workspace", "--all-features"], "Tests failed"),
            Self::TestFeatures => features::test_feature_matrix(),
            Self::Codegen => run_codegen(Path::new(BINDINGS_DIR)),
            Self::Help => {
                print_help();
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    let arg = env::args().nth(1);

    let result = match Task::parse(arg.as_deref()) {
        Some(task) => task.run(),
        None => {
            eprintln!("Unknown task: {}", arg.unwrap_or_default());
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Cadence Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    for (label, _, summary) in Task::ALL {
        println!("    {label:<15}{summary}");
    }
}

fn run_ci() -> Result<()> {
    let steps = [Task::Fmt, Task::Clippy, Task::Test, Task::TestFeatures];

    for (index, step) in steps.iter().enumerate() {
        println!("\n==> Step {}/{}: {step:?}", index + 1, steps.len());
        step.run()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("{failure}");
    }

    Ok(())
}

/// Runs the ts-rs export tests, then writes an `index.ts` re-exporting every
/// generated type.
fn run_codegen(bindings_dir: &Path) -> Result<()> {
    println!("==> Exporting TypeScript bindings...");
    cargo(
        &["test", "-p", "cadence-domain", "--features", "ts-gen", "--lib"],
        "TypeScript export tests failed",
    )?;

    if !bindings_dir.exists() {
        bail!("No bindings were written to {}", bindings_dir.display());
    }

    let modules = binding_modules(bindings_dir)?;
    let index_path = bindings_dir.join("index.ts");
    fs::write(&index_path, render_index(&modules))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("\n✓ {} bindings indexed in {}", modules.len(), index_path.display());
    Ok(())
}

/// Sorted module names of the generated `.ts` files, excluding `index.ts`.
fn binding_modules(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut modules: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()?.to_str()? != "ts" {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            (stem != "index").then(|| stem.to_string())
        })
        .collect();

    modules.sort();
    Ok(modules)
}

fn render_index(modules: &[String]) -> String {
    let mut content = String::from("// Generated by `cargo xtask codegen`. Do not edit.\n\n");
    for module in modules {
        let _ = writeln!(content, "export type {{ {module} }} from './{module}';");
    }
    content
}
