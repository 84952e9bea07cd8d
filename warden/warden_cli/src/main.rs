use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{catalog, check};

/// Warden Command Line Interface
///
/// Administers a JSON permission catalog and runs authorization checks
/// against it.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to the catalog file
    #[clap(long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default catalog (admin, editor, viewer)
    Seed {
        /// Overwrite an existing catalog file
        #[clap(long)]
        force: bool,
    },

    /// Empty the catalog
    Reset,

    /// Print the catalog contents
    Show,

    /// Print a principal's effective permissions
    Permissions {
        /// Principal ID (UUID)
        #[clap(long)]
        principal: String,
    },

    /// Assign a role to a principal
    Assign {
        /// Principal ID (UUID)
        #[clap(long)]
        principal: String,

        /// Role name
        #[clap(long)]
        role: String,
    },

    /// Run one authorization check
    ///
    /// Exits 0 when the operation is allowed and 2 when it is denied.
    Check {
        /// Principal ID (UUID)
        #[clap(long)]
        principal: String,

        /// The requested action
        #[clap(long)]
        action: String,

        /// The target entity type
        #[clap(long)]
        entity: String,

        /// The resource owner's principal ID, if the resource has one
        #[clap(long)]
        owner: Option<String>,

        /// Treat the resource as publicly visible
        #[clap(long)]
        public: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { force } => catalog::execute_seed(&cli.catalog, force),
        Commands::Reset => catalog::execute_reset(&cli.catalog),
        Commands::Show => catalog::execute_show(&cli.catalog),
        Commands::Assign { principal, role } => {
            catalog::execute_assign(&cli.catalog, &principal, &role)
        }
        Commands::Permissions { principal } => {
            check::execute_permissions(&cli.catalog, &principal)
        }
        Commands::Check {
            principal,
            action,
            entity,
            owner,
            public,
        } => {
            let allowed = check::execute_check(
                &cli.catalog,
                &principal,
                &action,
                &entity,
                owner.as_deref(),
                public,
            )?;

            if !allowed {
                std::process::exit(2);
            }

            Ok(())
        }
    }
}
