use anyhow::{Ok, Result};
use clap::ValueEnum;
use tracing::debug;

use super::super::args::CheckCommand;
use super::{
    helper::{finish, load_project, parse_error_issues, scan_project},
    {CommandResult, CommandSummary},
};

use crate::{
    issues::Issue,
    rules::{
        check_conflicts, check_identical, check_numerus, check_placeholders, check_unfinished,
        check_untranslated,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Untranslated,
    Placeholder,
    Conflict,
    Numerus,
    Identical,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Untranslated,
            CheckRule::Placeholder,
            CheckRule::Conflict,
            CheckRule::Numerus,
            CheckRule::Identical,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let project = load_project(&cmd.common)?;
    let scan = scan_project(&project, &cmd.paths)?;
    let catalogs = &scan.catalogs;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };
    debug!(?rules, catalogs = catalogs.len(), "running checks");

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Unfinished => {
                let issues = check_unfinished(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholders(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Conflict => {
                let issues = check_conflicts(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::ConflictingTranslation));
            }
            CheckRule::Numerus => {
                let issues = check_numerus(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::NumerusForms));
            }
            CheckRule::Identical => {
                let issues = check_identical(catalogs, &project.config.ignore_texts);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
        }
    }

    all_issues.extend(parse_error_issues(&scan.warnings));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        catalogs.len(),
        true,
    ))
}
