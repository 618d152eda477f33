//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::ValidationReport;
use crate::application::ApplicationError;
use crate::cli::args::{CategoryArg, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{BaseClassDef, ClassCategory, DomainError, NexusBaseClass, Oid};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    match command {
        Commands::Completion { shell } => {
            _completion(*shell);
            Ok(())
        }
        Commands::Config { command } => _config(&project_dir(cli)?, command),
        _ => {
            let container = build_container(cli)?;
            match command {
                Commands::Classes { category } => _classes(&container, *category),
                Commands::Describe { class, toml } => _describe(&container, class, *toml),
                Commands::Build {
                    specs,
                    validate,
                    uri,
                } => _build(&container, specs, *validate, uri.as_deref()),
                Commands::Validate { specs } => _validate(&container, specs),
                Commands::Create { class, oid } => _create(&container, class, *oid),
                Commands::Nxdl { file, toml } => _nxdl(&container, file, *toml),
                Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
            }
        }
    }
}

fn project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| CliError::Infra(InfraError::io("current directory", e))),
    }
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(Some(&project_dir(cli)?))?;
    let container = ServiceContainer::new(settings)?;
    for (path, err) in &container.load_report.failed {
        output::warning(&format!("skipped {}: {}", path.display(), err));
    }
    Ok(container)
}

#[instrument(skip(container))]
fn _classes(container: &ServiceContainer, category: Option<CategoryArg>) -> CliResult<()> {
    let wanted = category.map(ClassCategory::from);
    let defs = container
        .registry
        .definitions()
        .filter(|def| wanted.map_or(true, |c| def.category == c))
        .collect::<Vec<_>>();
    debug!("{} classes after filtering", defs.len());
    for def in defs {
        let origin = if def.name.parse::<NexusBaseClass>().is_ok() {
            "compiled"
        } else {
            "nxdl"
        };
        output::info(&format!(
            "{:<32} {:<12} {:>3} fields {:>3} groups  {}",
            def.name,
            def.category,
            def.fields.len(),
            def.groups.len(),
            origin
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _describe(container: &ServiceContainer, class: &str, as_toml: bool) -> CliResult<()> {
    let def = container
        .registry
        .get(class)
        .ok_or_else(|| DomainError::UnknownBaseClass(class.to_string()))?;
    print_definition(def, as_toml)
}

#[instrument(skip(container))]
fn _create(container: &ServiceContainer, class: &str, oid: Option<u64>) -> CliResult<()> {
    let trees = container.tree_service();
    let object = match oid {
        Some(0) => return Err(CliError::InvalidArgs("oid 0 is reserved".to_string())),
        Some(oid) => trees.create_group_with_oid(class, Oid::new(oid))?,
        None => trees.create_group(class)?,
    };
    output::success(&format!(
        "{} oid={}",
        object.class_name().unwrap_or(class),
        object.oid()
    ));
    if let Some(def) = container.registry.get(class) {
        output::detail(&format!(
            "{} fields, {} groups, {} attributes declared",
            def.fields.len(),
            def.groups.len(),
            def.attributes.len()
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _build(
    container: &ServiceContainer,
    specs: &[String],
    validate: bool,
    uri: Option<&str>,
) -> CliResult<()> {
    let service = container.tree_service();
    let tree = service.build_from_strs(uri, specs)?;
    output::info(&service.render(&tree, container.label_options()));
    if validate {
        let report = container.validation_service().validate(&tree);
        print_report(&report)?;
    }
    Ok(())
}

#[instrument(skip(container))]
fn _validate(container: &ServiceContainer, specs: &[String]) -> CliResult<()> {
    let tree = container.tree_service().build_from_strs(None, specs)?;
    let report = container.validation_service().validate(&tree);
    print_report(&report)
}

#[instrument(skip(container))]
fn _nxdl(container: &ServiceContainer, file: &Path, as_toml: bool) -> CliResult<()> {
    let def = container.nxdl_service().load_file(file)?;
    print_definition(&def, as_toml)
}

fn _config(project_dir: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(project_dir))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            let describe = |path: &Path| {
                let state = if path.exists() { "exists" } else { "not found" };
                format!("{} ({})", path.display(), state)
            };
            match global_config_path() {
                Some(path) => output::action("global", &describe(&path)),
                None => output::action("global", "no home directory"),
            }
            output::action("local", &describe(&local_config_path(project_dir)));
        }
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn print_definition(def: &BaseClassDef, as_toml: bool) -> CliResult<()> {
    if as_toml {
        let text = toml::to_string_pretty(def).map_err(|e| ApplicationError::OperationFailed {
            context: format!("serialize {}", def.name),
            source: Box::new(e),
        })?;
        output::info(&text);
        return Ok(());
    }

    output::header(&def.name);
    output::action("category", &def.category);
    if let Some(extends) = &def.extends {
        output::action("extends", extends);
    }
    if let Some(doc) = &def.doc {
        output::note(doc);
    }

    if !def.attributes.is_empty() {
        output::header("attributes");
        for attr in &def.attributes {
            output::detail(&format!("@{}: {}", attr.name, attr.nx_type));
        }
    }
    if !def.fields.is_empty() {
        output::header("fields");
        for field in &def.fields {
            let mut line = format!("{}: {}", field.name, field.nx_type);
            if let Some(units) = field.units {
                line.push_str(&format!(" [{units}]"));
            }
            if !field.enumeration.is_empty() {
                line.push_str(&format!(" {{{}}}", field.enumeration.iter().join(", ")));
            }
            if !field.attributes.is_empty() {
                let attrs = field.attributes.iter().map(|a| format!("@{a}")).join(" ");
                line.push_str(&format!(" {attrs}"));
            }
            output::detail(&line);
            if let Some(note) = &field.deprecated {
                output::note(&format!("  deprecated: {note}"));
            }
        }
    }
    if !def.groups.is_empty() {
        output::header("groups");
        for group in &def.groups {
            output::detail(&format!("{}: {}", group.name, group.class));
            if let Some(note) = &group.deprecated {
                output::note(&format!("  deprecated: {note}"));
            }
        }
    }
    Ok(())
}

fn print_report(report: &ValidationReport) -> CliResult<()> {
    for issue in report.issues() {
        output::issue(issue);
    }
    if report.has_errors() {
        output::failure(&format!(
            "{} errors, {} warnings",
            report.error_count(),
            report.warning_count()
        ));
        return Err(ApplicationError::ValidationFailed {
            errors: report.error_count(),
        }
        .into());
    }
    output::success(&format!("valid ({} warnings)", report.warning_count()));
    Ok(())
}
