use crate::domain::{Target, Targets};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

pub fn validate_targets(targets: &Targets) -> Result<()> {
    if let Some(invalid_target) = targets
        .iter()
        .find(|target| !is_valid_target_name(&target.name))
    {
        return Err(anyhow::anyhow!(
            "{} is not a valid target name",
            invalid_target.name
        ));
    }

    for target in targets.iter() {
        let mut chain = Vec::new();
        check_dependency_chain(target, &mut chain, targets)
            .with_context(|| format!("Target {} is invalid", target.name))?;
    }

    if let Some(default) = targets.default_target() {
        if !targets.contains(default) {
            return Err(anyhow::anyhow!("Default target {} not found", default));
        }
    }

    Ok(())
}

/// Walks the dependencies of `target` depth first, `chain` holding the targets being visited.
///
/// Fails on a dependency naming no target, or on a target reached again from itself.
fn check_dependency_chain<'a>(
    target: &'a Target,
    chain: &mut Vec<&'a str>,
    targets: &'a Targets,
) -> Result<()> {
    if let Some(start) = chain.iter().position(|&name| name == target.name) {
        return Err(anyhow::anyhow!(
            "Circular dependency: {} -> {}",
            chain[start..].join(" -> "),
            target.name
        ));
    }

    chain.push(&target.name);
    for dependency_name in &target.dependencies {
        let dependency = targets.get(dependency_name).ok_or_else(|| {
            anyhow::anyhow!(
                "{} depends on unknown target {}",
                target.name,
                dependency_name
            )
        })?;
        check_dependency_chain(dependency, chain, targets)?;
    }
    chain.pop();

    Ok(())
}

pub fn validate_requested_targets(requested_targets: &[String], targets: &Targets) -> Result<()> {
    let invalid_targets: Vec<&str> = requested_targets
        .iter()
        .filter(|requested_target| !targets.contains(requested_target))
        .map(String::as_str)
        .collect();

    if !invalid_targets.is_empty() {
        return Err(anyhow::anyhow!(
            "No such target: {}",
            invalid_targets.join(", ")
        ));
    }

    Ok(())
}

pub fn is_valid_target_name(target_name: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\w[-\w]*$").unwrap();
    }
    RE.is_match(target_name)
}
