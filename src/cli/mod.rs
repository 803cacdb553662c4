// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the symcheck command-line interface.
//!
//! `check` is the main event. The rest manage what surrounds it: the local
//! session (`login`, `logout`), recent searches (`history`), the disease table
//! and symptom vocabulary (`diseases`, `symptoms`), and the user's profile.
//!
//! Global options map onto `CheckerConfig` and can also come from the
//! environment (`SYMCHECK_DATA_DIR`, `SYMCHECK_KNOWLEDGE_BASE`).

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use symcheck::config::DEFAULT_DATA_DIR;
use symcheck::knowledge::vocabulary::DEFAULT_SUGGESTION_COUNT;
use symcheck::ProfileUpdate;

#[derive(Parser)]
#[command(
    name = "symcheck",
    about = "Match free-text symptoms against a disease table",
    version
)]
pub struct Cli {
    /// Directory for history, session, and profile files
    #[arg(long, global = true, env = "SYMCHECK_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// JSON knowledge base to use instead of the built-in table
    #[arg(long, global = true, env = "SYMCHECK_KNOWLEDGE_BASE")]
    pub knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze symptoms and rank matching diseases
    Check {
        /// Symptoms separated by commas, semicolons, periods, or newlines.
        /// Omit and pass --reuse to run a recent search again.
        symptoms: Option<String>,

        /// Re-run the Nth most recent search (0 = newest)
        #[arg(long, conflicts_with = "symptoms")]
        reuse: Option<usize>,

        /// Body temperature in °C
        #[arg(long)]
        temp: Option<f64>,

        /// Heart rate in beats per minute
        #[arg(long)]
        hr: Option<u16>,

        /// Blood oxygen saturation in percent
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        spo2: Option<u8>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Wait this long before analyzing (simulated latency; output is unaffected)
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },

    /// Show or clear recent searches
    History {
        /// Delete the stored history
        #[arg(long)]
        clear: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the diseases in the knowledge base
    Diseases {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List common symptoms, optionally filtered
    Symptoms {
        /// Only show symptoms containing this text
        #[arg(long)]
        prefix: Option<String>,

        /// Maximum number to show
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
        limit: usize,

        /// Append the first suggestion to this text and print the result
        #[arg(long, requires = "prefix")]
        append_to: Option<String>,
    },

    /// Start a local session
    Login {
        /// User identifier
        #[arg(long)]
        user_id: String,

        /// Email address
        #[arg(long)]
        email: String,
    },

    /// End the local session
    Logout,

    /// Show or edit the logged-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change editable fields (pass an empty string to clear one)
    Edit(ProfileEditArgs),
}

#[derive(Args)]
pub struct ProfileEditArgs {
    /// Given name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Family name
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
}

impl From<ProfileEditArgs> for ProfileUpdate {
    fn from(args: ProfileEditArgs) -> Self {
        ProfileUpdate {
            first_name: args.first_name,
            last_name: args.last_name,
            phone: args.phone,
            address: args.address,
            city: args.city,
        }
    }
}
