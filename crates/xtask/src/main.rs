use anyhow::Context;
use serde::Deserialize;

/// The domain crate must stay free of UI, transport and serialization crates.
const DOMAIN_CRATE: &str = "userdesk-domain";
const DOMAIN_FORBIDDEN: &[&str] = &[
    "userdesk-client",
    "dioxus",
    "reqwest",
    "gloo-net",
    "serde",
    "serde_json",
    "tokio",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        for dep in &violations {
            eprintln!("{DOMAIN_CRATE} must not depend on {dep}");
        }
        anyhow::bail!("arch-check failed with {} violation(s)", violations.len());
    }

    println!("arch-check passed");
    Ok(())
}

/// Forbidden normal dependencies of the domain crate. Dev-dependencies are ignored.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(deps: serde_json::Value) -> Metadata {
        serde_json::from_value(json!({
            "packages": [
                { "name": "userdesk-client", "dependencies": [{ "name": "dioxus", "kind": null }] },
                { "name": DOMAIN_CRATE, "dependencies": deps }
            ]
        }))
        .expect("valid metadata")
    }

    #[test]
    fn clean_domain_passes() {
        let meta = metadata(json!([
            { "name": "thiserror", "kind": null },
            { "name": "validator", "kind": null }
        ]));
        assert!(domain_violations(&meta).expect("domain present").is_empty());
    }

    #[test]
    fn ui_and_transport_deps_are_reported() {
        let meta = metadata(json!([
            { "name": "thiserror", "kind": null },
            { "name": "dioxus", "kind": null },
            { "name": "reqwest", "kind": null }
        ]));
        assert_eq!(
            domain_violations(&meta).expect("domain present"),
            vec!["dioxus".to_string(), "reqwest".to_string()]
        );
    }

    #[test]
    fn dev_dependencies_are_ignored() {
        let meta = metadata(json!([{ "name": "tokio", "kind": "dev" }]));
        assert!(domain_violations(&meta).expect("domain present").is_empty());
    }

    #[test]
    fn missing_domain_crate_is_an_error() {
        let meta: Metadata = serde_json::from_value(json!({ "packages": [] })).expect("valid");
        assert!(domain_violations(&meta).is_err());
    }
}
