use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::page_file::PageFile;
use anyhow::{anyhow, Result};
use blockpress_editor::{Block, BlockKind, BlockPatch, Catalog, EditSession};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Starter template (blank, landing)
    #[arg(short, long, default_value = "landing")]
    pub template: String,

    /// Pages directory
    #[arg(short, long, default_value = "pages")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Blockpress project...".bright_blue().bold()
    );

    // Create pages directory if it doesn't exist
    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Seed the starter page
    let page_path = src_dir.join("home.page.json");
    if !page_path.exists() {
        let mut page = PageFile::new("Home", starter_blocks(&args.template)?);
        page.template = Some(args.template.clone());
        page.touch();
        page.save(&page_path)?;
        println!("  {} Created home.page.json", "✓".green());
    }

    // Create config
    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!(
        "✨ {} Run {} to build your pages",
        "Done!".green().bold(),
        "blockpress build".bright_white()
    );

    Ok(())
}

/// Build a starter block list by driving an edit session, so starters
/// go through exactly the operations an interactive editor would.
fn starter_blocks(template: &str) -> Result<Vec<Block>> {
    let mut session = EditSession::new(template, Catalog::default());

    match template {
        "blank" => {}
        "landing" => {
            let heading = session.add_block(BlockKind::Heading)?;
            session.update_block(&heading.id, BlockPatch::with_content("Launch your idea"))?;
            session.set_style(&heading.id, "fontSize", "32px")?;

            let text = session.add_block(BlockKind::Text)?;
            session.update_block(
                &text.id,
                BlockPatch::with_content(
                    "Build pages from blocks, preview them instantly, and publish when ready.",
                ),
            )?;

            let button = session.add_block(BlockKind::Button)?;
            session.update_block(&button.id, BlockPatch::with_content("Get started"))?;

            let form = session.add_block(BlockKind::Form)?;
            session.update_block(&form.id, BlockPatch::with_content("Stay in the loop"))?;
        }
        other => {
            return Err(anyhow!(
                "Unknown template: {}. Use: blank or landing",
                other
            ));
        }
    }

    Ok(session.save())
}
