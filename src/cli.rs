use clap::{Parser, Subcommand};
use dc_aws_metadata::Category;

#[derive(Parser)]
#[command(name = "dc-aws-metadata")]
#[command(version)]
#[command(
    about = "Query the AWS instance types, database instance types and regions supported for Data Center deployments",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the entries of a catalog
    List {
        /// Which catalog to list
        #[arg(value_enum)]
        category: Category,

        /// Only show instance types of this family (e.g., m5, r5d)
        #[arg(short, long)]
        family: Option<String>,

        /// Print a JSON array instead of one entry per line
        #[arg(long)]
        json: bool,
    },

    /// Check that a value is in a catalog
    Check {
        /// Which catalog to check against
        #[arg(value_enum)]
        category: Category,

        /// Value to check (e.g., m5.large, db.t3.medium, us-east-1)
        value: String,
    },

    /// Group instance types by family
    Families {
        /// Instance or database catalog
        #[arg(value_enum)]
        category: Category,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List supported AWS regions
    Regions {
        /// Show location names
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the size of each catalog
    Summary,

    /// Manage default choices
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the stored defaults
    Show,

    /// Set the default region
    SetRegion {
        /// AWS region (e.g., us-east-1)
        region: String,
    },

    /// Set the default instance type
    SetInstanceType {
        /// EC2 instance type (e.g., m5.xlarge)
        instance_type: String,
    },

    /// Set the default database instance type
    SetDbInstanceType {
        /// RDS instance class (e.g., db.m5.large)
        db_instance_type: String,
    },

    /// Clear one default (region, instance-type, db-instance-type)
    Unset {
        option: String,
    },

    /// Delete the config file
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["dc-aws-metadata", "list", "instance"]);
        match cli.command {
            Commands::List {
                category,
                family,
                json,
            } => {
                assert_eq!(category, Category::Instance);
                assert!(family.is_none());
                assert!(!json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_list_with_options() {
        let cli = Cli::parse_from([
            "dc-aws-metadata",
            "list",
            "database",
            "--family",
            "r5",
            "--json",
        ]);
        match cli.command {
            Commands::List {
                category,
                family,
                json,
            } => {
                assert_eq!(category, Category::Database);
                assert_eq!(family, Some("r5".to_string()));
                assert!(json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["dc-aws-metadata", "list", "buckets"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["dc-aws-metadata", "check", "region", "eu-north-1"]);
        match cli.command {
            Commands::Check { category, value } => {
                assert_eq!(category, Category::Region);
                assert_eq!(value, "eu-north-1");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_families() {
        let cli = Cli::parse_from(["dc-aws-metadata", "families", "instance", "--json"]);
        match cli.command {
            Commands::Families { category, json } => {
                assert_eq!(category, Category::Instance);
                assert!(json);
            }
            _ => panic!("Expected Families command"),
        }
    }

    #[test]
    fn test_cli_parse_regions_detailed() {
        let cli = Cli::parse_from(["dc-aws-metadata", "regions", "--detailed"]);
        match cli.command {
            Commands::Regions { detailed } => {
                assert!(detailed);
            }
            _ => panic!("Expected Regions command"),
        }
    }

    #[test]
    fn test_cli_parse_summary() {
        let cli = Cli::parse_from(["dc-aws-metadata", "summary"]);
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn test_cli_parse_config_set_db_instance_type() {
        let cli = Cli::parse_from([
            "dc-aws-metadata",
            "config",
            "set-db-instance-type",
            "db.m5.large",
        ]);
        match cli.command {
            Commands::Config {
                action: ConfigAction::SetDbInstanceType { db_instance_type },
            } => {
                assert_eq!(db_instance_type, "db.m5.large");
            }
            _ => panic!("Expected Config SetDbInstanceType command"),
        }
    }

    #[test]
    fn test_cli_parse_config_unset() {
        let cli = Cli::parse_from(["dc-aws-metadata", "config", "unset", "region"]);
        match cli.command {
            Commands::Config {
                action: ConfigAction::Unset { option },
            } => {
                assert_eq!(option, "region");
            }
            _ => panic!("Expected Config Unset command"),
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["dc-aws-metadata", "-v", "summary"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_command_structure() {
        Cli::command().debug_assert();
    }
}
