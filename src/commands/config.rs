//! Implementation of the `huggle-parse config` command.
//!
//! Parses a project or user configuration file and prints either a short
//! summary or the full parsed value as JSON.

use super::{SourceFormat, load_site, read_source};
use crate::cli::ConfigArgs;
use huggle_parser::config::{UserConfiguration, WikiSite};
use huggle_parser::error::{ParserError, Result};
use huggle_parser::fetch::parse_yaml_document;
use huggle_parser::scoring::ScoreCategory;
use serde::Serialize;
use std::path::Path;

/// Execute the `huggle-parse config` command.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let output = if args.user {
        let user = load_user(&args.file)?;
        if args.json {
            to_json(&user)?
        } else {
            render_user(&user)
        }
    } else {
        let site = load_site(&args.file)?;
        if args.json {
            to_json(&site)?
        } else {
            render_site(&site)
        }
    };
    print!("{output}");
    Ok(())
}

fn load_user(path: &Path) -> Result<UserConfiguration> {
    let text = read_source(path)?;
    Ok(match SourceFormat::of(path) {
        SourceFormat::Yaml => UserConfiguration::from_yaml(&parse_yaml_document(&text)?),
        SourceFormat::Legacy => UserConfiguration::from_legacy(&text),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| ParserError::UserError(format!("failed to serialize configuration: {}", e)))
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub(crate) fn render_site(site: &WikiSite) -> String {
    let project = &site.project;
    let mut lines = vec![
        format!("Site:              {}", site.name),
        format!("Enabled for all:   {}", yes_no(project.enable_all)),
        format!(
            "Minimal version:   {}",
            if project.minimal_version.is_empty() {
                "(none)"
            } else {
                project.minimal_version.as_str()
            }
        ),
        format!("IP score:          {}", project.ip_score),
        format!("Bot score:         {}", project.bot_score),
        format!(
            "Warnings count:    {} days{}",
            project.template_age,
            if project.trim_old_warnings {
                ""
            } else {
                " (old warnings kept)"
            }
        ),
        format!("Warning types:     {}", project.warning_types.len()),
        format!("Revert summaries:  {}", project.revert_summaries.len()),
    ];

    if project.warning_templates.is_empty() {
        lines.push("Warning templates: built-in".to_string());
    } else {
        lines.push(format!(
            "Warning templates: {}",
            project.warning_templates.len()
        ));
    }
    lines.push(format!(
        "Months:            {}",
        if site.months.is_empty() {
            "English"
        } else {
            "configured"
        }
    ));

    lines.push(String::new());
    lines.push("Score rules:".to_string());
    for category in ScoreCategory::ALL {
        lines.push(format!(
            "  {:<24}{}",
            category.key(),
            site.scores.rules(category).len()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Queues: {}", project.queues.len()));
    for queue in &project.queues {
        lines.push(format!("  {} ({} rules)", queue.name, queue.rules.len()));
    }

    lines.join("\n") + "\n"
}

pub(crate) fn render_user(user: &UserConfiguration) -> String {
    let mut lines = vec![
        format!("Revert summaries: {}", user.revert_summaries.len()),
        format!("Options:          {}", user.options.len()),
        format!("Queues:           {}", user.queues.len()),
    ];
    for queue in &user.queues {
        lines.push(format!("  {} ({} rules)", queue.name, queue.rules.len()));
    }
    lines.join("\n") + "\n"
}
