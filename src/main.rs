use anyhow::Context;
use log::info;
use tagfreq_sorter::{render_entries, sort_tags_file};

/// Produced by the tag frequency collector in the working directory.
const INPUT_PATH: &str = "tags_freq.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let entries =
        sort_tags_file(INPUT_PATH).with_context(|| format!("Failed to load {}", INPUT_PATH))?;
    info!("Sorted {} tags from {}", entries.len(), INPUT_PATH);

    println!("{}", render_entries(&entries));
    Ok(())
}
