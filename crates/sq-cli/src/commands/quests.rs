use std::path::Path;

use colored::Colorize;

pub fn run(data: Option<&Path>, profile_id: &str, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let profile = catalog
        .require_profile(profile_id)
        .map_err(|e| e.to_string())?;
    let checkpoints = catalog.checkpoints(&profile.id);

    if json {
        let out = serde_json::to_string_pretty(checkpoints)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} {}", profile.glyph, profile.display_name.bold());
    if !profile.virtue_tags.is_empty() {
        println!("  {}", format!("Virtues: {}", profile.tags_label()).dimmed());
    }
    println!();

    for (i, checkpoint) in checkpoints.iter().enumerate() {
        let challenge = &checkpoint.challenge;
        println!(
            "  {}. {} [{}]",
            i + 1,
            checkpoint.title.bold(),
            challenge.kind().to_string().dimmed()
        );
        println!("     {}", challenge.prompt());
        let reward: Vec<String> = challenge
            .reward
            .iter()
            .map(|(v, n)| format!("+{n} {v}"))
            .collect();
        if !reward.is_empty() {
            println!("     reward: {}", reward.join(", "));
        }
    }

    println!();
    println!("  {} chapters", checkpoints.len());

    Ok(())
}
