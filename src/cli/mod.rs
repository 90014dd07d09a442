//! CLI Module
//!
//! Command-line interface for the Accord formulation engine.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{Layer, Season};
use crate::formulation::SkinType;

/// Accord - perfume formulation calculator
#[derive(Parser, Debug)]
#[command(name = "accord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (JSON), overrides the configured catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog notes
    #[command(name = "catalog")]
    Catalog {
        /// Only notes of this season (SP, SU, AU, WI)
        #[arg(short, long)]
        season: Option<Season>,

        /// Only notes of this layer (top, mid, base)
        #[arg(short, long)]
        layer: Option<Layer>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    #[command(name = "note")]
    Note {
        /// Note id, e.g. SDW
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Compute a formulation for a set of notes
    #[command(name = "formulate")]
    Formulate {
        /// Note ids in blend order
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<String>,

        /// Skin type (dry, oily, combination)
        #[arg(short, long)]
        skin: Option<SkinType>,

        /// Total mass in grams
        #[arg(short, long)]
        mass: Option<f64>,

        /// Oil concentration in percent
        #[arg(short, long)]
        concentration: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Generate random sample recipes
    #[command(name = "sample")]
    Sample {
        /// Number of recipes
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Only recipes containing this note
        #[arg(long)]
        with_note: Option<String>,

        #[arg(long)]
        json: bool,
    },
}
