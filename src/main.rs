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
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use clap::Parser;

use mutfunc::Category;
use mutfunc::encoder::MatrixEncoder;
use mutfunc::plugin::{Mutfunc, MutfuncConfig, Plugin, VariantContext};
use mutfunc::printer::Rendered;
use mutfunc::store::{DirStore, MemoryStore};

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    let res = stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init();
    if let Err(e) = res {
        eprintln!("Could not initialize logging: {}", e);
    }
}

/// Plugin parameters for the command line options.
fn plugin_params(
    db: Option<&Path>,
    categories: &[String],
    extended: bool,
    format: &str,
) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    if let Some(db) = db {
        params.push(format!("db={}", db.display()));
    }
    categories.iter().for_each(|category| params.push(format!("{}=1", category)));
    params.push(format!("extended_output={}", if extended { 1 } else { 0 }));
    params.push(format!("output_format={}", format));
    params
}

fn annotate(
    store: &Path,
    variant: &VariantContext,
    categories: &[String],
    extended: bool,
    format: &str,
) -> Result<(), E> {
    let params = plugin_params(Some(store), categories, extended, format);
    let mut plugin = Mutfunc::<DirStore>::configure(params.as_slice())?;

    let stdout = std::io::stdout();
    let mut conn_out = BufWriter::new(stdout.lock());
    match plugin.annotate(variant)? {
        Some(rendered @ Rendered::Structured(_)) => writeln!(conn_out, "{}", rendered.to_json()?)?,
        Some(rendered @ Rendered::Flat(_)) => write!(conn_out, "{}", rendered.to_text())?,
        None => log::info!("No predictions for {} {}{}", variant.peptide, variant.position, variant.aa),
    }
    conn_out.flush()?;
    Ok(())
}

fn pack(
    input_file: &Path,
    category: &str,
    n_positions: usize,
    out_file: &Path,
) -> Result<(), E> {
    let category = category.parse::<Category>()?;

    let mut conn_in = File::open(input_file)?;
    let parser = mutfunc::parser::Parser::new(&mut conn_in, category);

    let mut encoder = MatrixEncoder::new(category, n_positions)?;
    let mut n_cells: usize = 0;
    for cell in parser {
        let cell = cell?;
        encoder.insert(cell.position, cell.aa, &cell.record)?;
        n_cells += 1;
    }
    log::info!("Read {} {} predictions from {}", n_cells, category, input_file.display());

    let blob = encoder.finish()?;
    let mut conn_out = BufWriter::new(File::create(out_file)?);
    conn_out.write_all(&blob)?;
    conn_out.flush()?;
    Ok(())
}

fn describe(
    categories: &[String],
    extended: bool,
    format: &str,
) -> Result<(), E> {
    let params = plugin_params(None, categories, extended, format);
    let config = MutfuncConfig::from_params(params.as_slice())?;
    let plugin = Mutfunc::with_store(MemoryStore::new(), config);

    let stdout = std::io::stdout();
    let mut conn_out = BufWriter::new(stdout.lock());
    for (key, description) in plugin.describe_fields() {
        writeln!(conn_out, "{}\t{}", key, description)?;
    }
    conn_out.flush()?;
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();

    // Subcommands:
    let res = match &cli.command {
        // Annotate
        Some(cli::Commands::Annotate {
            store,
            peptide,
            position,
            aa,
            categories,
            extended,
            format,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            let variant = VariantContext{ peptide: peptide.clone(), position: *position, aa: *aa };
            annotate(store, &variant, categories, *extended, format)
        },

        // Pack
        Some(cli::Commands::Pack {
            input_file,
            category,
            n_positions,
            out_file,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            pack(input_file, category, *n_positions, out_file)
        },

        // Describe
        Some(cli::Commands::Describe {
            categories,
            extended,
            format,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            describe(categories, *extended, format)
        },

        None => {
            init_log(1);
            log::error!("No subcommand given, see --help");
            std::process::exit(2);
        },
    };

    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
