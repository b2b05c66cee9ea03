mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use dc_aws_metadata::catalog::region_name;
use dc_aws_metadata::config::Preferences;
use dc_aws_metadata::lookup::{self, Category};
use std::fs;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            category,
            family,
            json,
        } => {
            cmd_list(category, family.as_deref(), json)?;
        }
        Commands::Check { category, value } => {
            cmd_check(category, &value)?;
        }
        Commands::Families { category, json } => {
            cmd_families(category, json)?;
        }
        Commands::Regions { detailed } => {
            cmd_regions(detailed);
        }
        Commands::Summary => {
            cmd_summary();
        }
        Commands::Config { action } => {
            cmd_config(action)?;
        }
    }

    Ok(())
}

fn cmd_list(category: Category, family: Option<&str>, json: bool) -> Result<()> {
    let entries: Vec<&str> = match family {
        None => category.entries().to_vec(),
        Some(name) => {
            if category == Category::Region {
                bail!("--family only applies to instance and database catalogs");
            }
            let entries = lookup::family_entries(category, name);
            if entries.is_empty() {
                let known: Vec<_> = lookup::families(category).iter().map(|f| f.name).collect();
                bail!(
                    "Unknown {} family: {}. Known families: {}",
                    category.label(),
                    name,
                    known.join(", ")
                );
            }
            entries
        }
    };

    debug!("Listing {} {} entries", entries.len(), category.label());

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
    Ok(())
}

fn cmd_check(category: Category, value: &str) -> Result<()> {
    let entry = lookup::check(category, value)?;
    match category {
        Category::Region => match region_name(entry) {
            Some(name) => println!("✅ {} ({})", entry, name),
            None => println!("✅ {}", entry),
        },
        _ => println!("✅ {}", entry),
    }
    Ok(())
}

fn cmd_families(category: Category, json: bool) -> Result<()> {
    if category == Category::Region {
        bail!("Regions have no families. Use 'dc-aws-metadata regions' instead.");
    }

    let families = lookup::families(category);
    if json {
        println!("{}", serde_json::to_string_pretty(&families)?);
        return Ok(());
    }

    println!();
    println!("{:<8} Sizes", "Family");
    println!("{}", "-".repeat(60));
    for family in &families {
        println!("{:<8} {}", family.name, family.sizes.join(", "));
    }
    println!();
    Ok(())
}

fn cmd_regions(detailed: bool) {
    println!();
    println!("Supported AWS Regions:");
    println!();

    let regions = Category::Region.entries();
    if detailed {
        println!("{:<20} Name", "Code");
        println!("{}", "-".repeat(40));
        for code in regions {
            println!("{:<20} {}", code, region_name(code).unwrap_or("Unknown"));
        }
    } else {
        for code in regions {
            println!("  {}", code);
        }
    }
    println!();
}

fn cmd_summary() {
    println!();
    println!("📊 Catalog");
    println!();
    for category in Category::ALL {
        println!("   {:<24} {}", category.label(), category.entries().len());
    }
    println!();
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let prefs = Preferences::load()?;
            println!();
            println!("⚙️  Configuration");
            println!();

            if prefs.is_empty() {
                println!("   No configuration set.");
                println!();
                println!("   Set defaults with:");
                println!("     dc-aws-metadata config set-region <REGION>");
                println!("     dc-aws-metadata config set-instance-type <TYPE>");
                println!("     dc-aws-metadata config set-db-instance-type <TYPE>");
            } else {
                if let Some(ref region) = prefs.default_region {
                    let name = region_name(region).unwrap_or("Unknown");
                    println!("   Default region:                 {} ({})", region, name);
                }
                if let Some(ref instance_type) = prefs.default_instance_type {
                    println!("   Default instance type:          {}", instance_type);
                }
                if let Some(ref db_instance_type) = prefs.default_db_instance_type {
                    println!("   Default database instance type: {}", db_instance_type);
                }
                if let Some(updated_at) = prefs.updated_at {
                    println!(
                        "   Last updated:                   {}",
                        updated_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
            }

            println!();
            println!(
                "   Config file: {}",
                Preferences::config_file_path()?.display()
            );
            println!();
        }

        ConfigAction::SetRegion { region } => {
            let mut prefs = Preferences::load()?;
            prefs.set_default_region(&region)?;
            prefs.save()?;

            let region = prefs.default_region.as_deref().unwrap_or_default();
            let name = region_name(region).unwrap_or("Unknown");
            debug!("Default region set to {}", region);
            println!("✅ Default region set to: {} ({})", region, name);
        }

        ConfigAction::SetInstanceType { instance_type } => {
            let mut prefs = Preferences::load()?;
            prefs.set_default_instance_type(&instance_type)?;
            prefs.save()?;

            let instance_type = prefs.default_instance_type.as_deref().unwrap_or_default();
            debug!("Default instance type set to {}", instance_type);
            println!("✅ Default instance type set to: {}", instance_type);
        }

        ConfigAction::SetDbInstanceType { db_instance_type } => {
            let mut prefs = Preferences::load()?;
            prefs.set_default_db_instance_type(&db_instance_type)?;
            prefs.save()?;

            let db_instance_type = prefs
                .default_db_instance_type
                .as_deref()
                .unwrap_or_default();
            debug!("Default database instance type set to {}", db_instance_type);
            println!("✅ Default database instance type set to: {}", db_instance_type);
        }

        ConfigAction::Unset { option } => {
            let mut prefs = Preferences::load()?;
            prefs.clear(&option)?;
            prefs.save()?;
            println!("✅ Default {} cleared", option);
        }

        ConfigAction::Reset => {
            let path = Preferences::config_file_path()?;
            if path.exists() {
                fs::remove_file(&path)?;
                println!("✅ Configuration reset to defaults");
            } else {
                println!("No configuration file to reset.");
            }
        }
    }

    Ok(())
}
