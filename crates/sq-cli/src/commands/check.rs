use std::path::Path;

use colored::Colorize;

use sq_core::validate_catalog;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let catalog = super::content_config(data)
        .load_unchecked()
        .map_err(|e| e.to_string())?;

    let issues = validate_catalog(&catalog);
    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} profiles, {} checkpoints",
        catalog.profile_count(),
        catalog.checkpoint_count()
    );
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
