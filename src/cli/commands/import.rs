use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::input_file;

fn resolve(arg: &Option<String>) -> AppResult<Option<PathBuf>> {
    arg.as_deref().map(input_file).transpose()
}

/// Import one or more saved API responses.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        attendance,
        routines,
        profile,
        subjects,
        subject_assigns,
        teachers,
        designations,
        fees,
    } = cmd
    {
        let args = [
            attendance,
            routines,
            profile,
            subjects,
            subject_assigns,
            teachers,
            designations,
            fees,
        ];
        if args.iter().all(|a| a.is_none()) {
            warning(
                "Nothing to import: use --attendance, --routines, --profile, --subjects, \
                 --subject-assigns, --teachers, --designations and/or --fees.",
            );
            return Ok(());
        }

        // every file is checked before the snapshot is touched
        let [attendance, routines, profile, subjects, subject_assigns, teachers, designations, fees] =
            [
                resolve(attendance)?,
                resolve(routines)?,
                resolve(profile)?,
                resolve(subjects)?,
                resolve(subject_assigns)?,
                resolve(teachers)?,
                resolve(designations)?,
                resolve(fees)?,
            ];

        let mut pool = DbPool::open(&cfg.database)?;

        // profile first: it selects the routine of the student's class
        if let Some(p) = profile {
            ImportLogic::profile(&mut pool, &p)?;
        }
        if let Some(r) = routines {
            ImportLogic::routines(&mut pool, &r)?;
        }
        if let Some(a) = attendance {
            ImportLogic::attendance(&mut pool, &a)?;
        }
        if let Some(s) = subjects {
            ImportLogic::subjects(&mut pool, &s)?;
        }
        if let Some(s) = subject_assigns {
            ImportLogic::subject_assignments(&mut pool, &s)?;
        }
        if let Some(d) = designations {
            ImportLogic::designations(&mut pool, &d)?;
        }
        if let Some(t) = teachers {
            ImportLogic::staff(&mut pool, &t)?;
        }
        if let Some(f) = fees {
            ImportLogic::fees(&mut pool, &f)?;
        }
    }

    Ok(())
}
