// mutfunc: Decoding and formatting mutfunc variant effect prediction matrices.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // Look up the predictions for a substitution
    Annotate {
        // Directory with <category>/<peptide>.gz matrices
        #[arg(short = 'd', long = "store", required = true)]
        store: PathBuf,

        // Peptide identifier
        #[arg(short = 'p', long = "peptide", required = true)]
        peptide: String,

        // One-based position in the peptide
        #[arg(long = "position", required = true)]
        position: usize,

        // Substituted amino acid
        #[arg(long = "aa", required = true)]
        aa: char,

        // Categories to report, defaults to all
        #[arg(short = 'c', long = "category", help = "motif, int, mod or exp")]
        categories: Vec<String>,

        // Output every field
        #[arg(long = "extended", default_value_t = false)]
        extended: bool,

        // Output format
        #[arg(long = "format", default_value = "json", help = "json, text or vcf")]
        format: String,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Build a matrix from plain text predictions
    Pack {
        // Tab-separated predictions
        #[arg(group = "input", required = true, help = "Input file")]
        input_file: PathBuf,

        // Category of the predictions
        #[arg(short = 'c', long = "category", required = true, help = "motif, int, mod or exp")]
        category: String,

        // Length of the peptide
        #[arg(short = 'n', long = "positions", required = true)]
        n_positions: usize,

        // Output file path
        #[arg(short = 'o', long = "output", required = true)]
        out_file: PathBuf,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Print descriptions of the output fields
    Describe {
        // Categories to describe, defaults to all
        #[arg(short = 'c', long = "category", help = "motif, int, mod or exp")]
        categories: Vec<String>,

        // Describe every field
        #[arg(long = "extended", default_value_t = false)]
        extended: bool,

        // Output format
        #[arg(long = "format", default_value = "json", help = "json, text or vcf")]
        format: String,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}
