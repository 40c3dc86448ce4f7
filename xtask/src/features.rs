use std::process::Command;

use anyhow::{Context, Result};

const PACKAGES: &[&str] = &["cadence-domain", "cadence-core", "cadence-infra"];

const FEATURE_COMBINATIONS: &[(&str, &[&str])] = &[
    ("cadence-domain", &[]), // default
    ("cadence-domain", &["ts-gen"]),
];

/// Check that every crate and feature combination compiles.
pub fn test_feature_matrix() -> Result<()> {
    for package in PACKAGES {
        println!("\n==> cargo check -p {package}");
        run_check(package, None)?;
    }

    println!("\nTesting {} feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, (package, features)) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let feature_arg = if features.is_empty() { None } else { Some(joined.as_str()) };

        println!(
            "\n[{}/{}] cargo check -p {package}{}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            feature_arg.map(|arg| format!(" --features {arg}")).unwrap_or_default()
        );

        run_check(package, feature_arg)?;
        println!("✅ {package} [{}] compiled successfully", feature_arg.unwrap_or("default"));
    }

    println!("\n✅ All feature combinations compile successfully!");

    Ok(())
}

fn run_check(package: &str, features: Option<&str>) -> Result<()> {
    let mut command = Command::new("cargo");
    command.arg("check").arg("-p").arg(package);

    if let Some(feature_list) = features {
        command.arg("--features").arg(feature_list);
    }

    let label = features.unwrap_or("default");
    let status =
        command.status().with_context(|| format!("Failed to run cargo check for '{label}'"))?;

    if !status.success() {
        anyhow::bail!("{package} with features '{label}' failed to compile");
    }

    Ok(())
}
