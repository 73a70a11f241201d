use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    if catalog.profiles().is_empty() {
        println!("  No profiles found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Hero", "Virtues", "Chapters"]);

    for profile in catalog.profiles() {
        let virtues = if profile.virtue_tags.is_empty() {
            "—".to_string()
        } else {
            profile.tags_label()
        };
        table.add_row(vec![
            profile.id.clone(),
            format!("{} {}", profile.glyph, profile.display_name),
            virtues,
            catalog.checkpoints(&profile.id).len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} profiles", catalog.profile_count());

    Ok(())
}
