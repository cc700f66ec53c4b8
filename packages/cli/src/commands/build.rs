use crate::config::Config;
use crate::page_file::{PageFile, PAGE_FILE_SUFFIX};
use anyhow::{anyhow, Result};
use blockpress_compiler_html::{compile_page, CompileOptions};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let src_dir = config.get_src_dir(cwd);

    if !src_dir.exists() {
        return Err(anyhow!("Pages directory does not exist: {:?}", src_dir));
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };

    println!("{}", "🔨 Building pages...".bright_blue().bold());

    let page_files = find_page_files(&src_dir);

    if page_files.is_empty() {
        println!("{}", "⚠️  No .page.json files found".yellow());
        return Ok(());
    }

    println!("Found {} pages", page_files.len());

    let options = CompileOptions {
        pretty: config.build_options.pretty,
        base_styles: config.build_options.base_styles,
        ..CompileOptions::default()
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for page_path in &page_files {
        let relative_path = page_path.strip_prefix(&src_dir).unwrap_or(page_path);
        match build_file(page_path, &out_dir, &options, args.stdout) {
            Ok(output) => {
                success_count += 1;
                println!("  {} {} → {}", "✓".green(), relative_path.display(), output);
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "✨ {} Built {} pages",
            "Done!".green().bold(),
            success_count
        );
    } else {
        println!(
            "{} {} built, {} failed",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn build_file(
    page_path: &Path,
    out_dir: &Path,
    options: &CompileOptions,
    stdout: bool,
) -> Result<String> {
    let page = PageFile::load(page_path)?;
    let html = compile_page(&page.title, &page.blocks, options.clone())?;

    if stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    let stem = page_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(PAGE_FILE_SUFFIX))
        .ok_or_else(|| anyhow!("Not a .page.json file: {:?}", page_path))?;

    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(format!("{}.html", stem));
    fs::write(&out_path, html)?;

    Ok(out_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default())
}

fn find_page_files(src_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(src_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(PAGE_FILE_SUFFIX))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}
