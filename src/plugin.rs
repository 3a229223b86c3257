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

//! Variant annotation plugin interface.
//!
//! A [Plugin] is configured once from `key=value` parameters and then asked
//! to annotate one variant at a time. [Mutfunc] implements the interface on
//! top of the matrix decoder.
//!
//! [Mutfunc] keeps the decompressed matrices of the most recently annotated
//! peptide, so consecutive variants in the same peptide only fetch and
//! decompress each matrix once.
//!
//! ## Usage
//!
//! ```rust
//! use mutfunc::{Category, MotifPrediction, Record};
//! use mutfunc::encoder::MatrixEncoder;
//! use mutfunc::plugin::{Mutfunc, MutfuncConfig, VariantContext};
//! use mutfunc::store::MemoryStore;
//!
//! let mut encoder = MatrixEncoder::new(Category::Motif, 10).unwrap();
//! encoder.insert(5, 'D', &Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) })).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.insert("P1", Category::Motif, encoder.finish().unwrap());
//!
//! let config = MutfuncConfig::from_params(&["motif=1", "output_format=text"]).unwrap();
//! let mut plugin = Mutfunc::with_store(store, config);
//!
//! let variant = VariantContext{ peptide: "P1".to_string(), position: 5, aa: 'D' };
//! let got = plugin.annotate(&variant).unwrap().unwrap();
//!
//! assert_eq!(got.to_text(), "mutfunc_motif=1\n");
//! ```
//!

use crate::Category;
use crate::OutputFormat;
use crate::Options;
use crate::annotate_matrices;
use crate::assembler::output_fields;
use crate::decoder::decompress;
use crate::printer::Rendered;
use crate::schema::EVIDENCE;
use crate::store::BlobStore;
use crate::store::DirStore;

use std::path::PathBuf;

use indexmap::IndexMap;

type E = Box<dyn std::error::Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Parameter is not of the form `key=value`.
    Malformed(String),
    /// Parameter key is not recognised.
    UnknownKey(String),
    /// Parameter value is not valid for its key.
    InvalidValue { key: String, value: String },
    /// `db` was not given.
    MissingDatabase,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Malformed(param) => write!(f, "parameter '{}' is not of the form key=value", param),
            ConfigError::UnknownKey(key) => write!(f, "unknown parameter '{}'", key),
            ConfigError::InvalidValue { key, value } => write!(f, "'{}' is not a valid value for {}", value, key),
            ConfigError::MissingDatabase => write!(f, "the db parameter is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The variant to annotate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantContext {
    /// Identifier of the affected peptide.
    pub peptide: String,
    /// One-based position in the peptide.
    pub position: usize,
    /// Substituted amino acid.
    pub aa: char,
}

pub trait Plugin: Sized {
    /// Build the plugin from `key=value` parameters.
    fn configure<S: AsRef<str>>(params: &[S]) -> Result<Self, E>;

    /// Annotation for `variant`, or None if there is nothing to report.
    fn annotate(&mut self, variant: &VariantContext) -> Result<Option<Rendered>, E>;

    /// Description of each output key.
    fn describe_fields(&self) -> IndexMap<String, String>;
}

/// Settings parsed from plugin parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutfuncConfig {
    /// Root of a [DirStore].
    pub db: Option<PathBuf>,
    /// Enabled categories in output order.
    pub categories: Vec<Category>,
    pub options: Options,
}

fn parse_flag(
    key: &str,
    value: &str,
) -> Result<bool, ConfigError> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue{ key: key.to_string(), value: value.to_string() }),
    }
}

impl MutfuncConfig {
    /// Parse `key=value` parameters.
    ///
    /// Supported keys are `db`, `motif`, `int`, `mod`, `exp`,
    /// `extended_output` and `output_format`. If none of the category
    /// flags is set, every category is enabled.
    ///
    pub fn from_params<S: AsRef<str>>(
        params: &[S],
    ) -> Result<Self, E> {
        let mut db: Option<PathBuf> = None;
        let mut enabled: Vec<Category> = Vec::new();
        let mut extended = false;
        let mut format = OutputFormat::default();

        for param in params {
            let param = param.as_ref();
            let (key, value) = param.split_once('=').ok_or(ConfigError::Malformed(param.to_string()))?;
            match key {
                "db" => db = Some(PathBuf::from(value)),
                "extended_output" => extended = parse_flag(key, value)?,
                "output_format" => {
                    format = value.parse::<OutputFormat>().map_err(|_| ConfigError::InvalidValue{ key: key.to_string(), value: value.to_string() })?
                },
                _ => {
                    let category = key.parse::<Category>().map_err(|_| ConfigError::UnknownKey(key.to_string()))?;
                    if parse_flag(key, value)? && !enabled.contains(&category) {
                        enabled.push(category);
                    }
                },
            }
        }

        let categories: Vec<Category> = if enabled.is_empty() {
            Category::all().to_vec()
        } else {
            Category::all().into_iter().filter(|x| enabled.contains(x)).collect()
        };

        Ok(MutfuncConfig{ db, categories, options: Options::new(extended, &format) })
    }
}

impl Default for MutfuncConfig {
    fn default() -> Self {
        MutfuncConfig{ db: None, categories: Category::all().to_vec(), options: Options::new(false, &OutputFormat::default()) }
    }
}

/// Decompressed matrices of one peptide.
struct PeptideMatrices {
    peptide: String,
    matrices: Vec<(Category, Vec<u8>)>,
}

pub struct Mutfunc<S: BlobStore> {
    store: S,
    config: MutfuncConfig,
    last: Option<PeptideMatrices>,
}

impl<S: BlobStore> Mutfunc<S> {
    pub fn with_store(
        store: S,
        config: MutfuncConfig,
    ) -> Self {
        Mutfunc{ store, config, last: None }
    }

    fn load(
        &self,
        peptide: &str,
    ) -> PeptideMatrices {
        let matrices: Vec<(Category, Vec<u8>)> = self.config.categories.iter().filter_map(|category| {
            let blob = match self.store.fetch(peptide, category) {
                Ok(blob) => blob?,
                Err(e) => {
                    log::warn!("Could not fetch {} predictions for {}: {}", category, peptide, e);
                    return None
                },
            };
            match decompress(&blob) {
                Ok(matrix) => Some((*category, matrix)),
                Err(e) => {
                    log::warn!("Skipping {} predictions for {}: {}", category, peptide, e);
                    None
                },
            }
        }).collect();

        PeptideMatrices{ peptide: peptide.to_string(), matrices }
    }

    /// Decode and format the predictions for `variant`.
    pub fn annotate(
        &mut self,
        variant: &VariantContext,
    ) -> Result<Option<Rendered>, E> {
        let cached = self.last.as_ref().is_some_and(|x| x.peptide == variant.peptide);
        if !cached {
            self.last = Some(self.load(&variant.peptide));
        }

        let Some(last) = self.last.as_ref() else {
            return Ok(None)
        };
        let matrices: Vec<(Category, &[u8])> = last.matrices.iter().map(|(category, matrix)| (*category, matrix.as_slice())).collect();

        Ok(annotate_matrices(&matrices, variant.position, variant.aa, &self.config.options))
    }

    /// Header descriptions keyed by the flat output key of each enabled
    /// category.
    ///
    /// `evidence` is written in brackets together with its delimiter since
    /// it is left out of records where it is missing.
    ///
    pub fn describe_fields(&self) -> IndexMap<String, String> {
        let separator = self.config.options.delimiter.to_string();
        self.config.categories.iter().map(|category| {
            let (optional, always): (Vec<&str>, Vec<&str>) = output_fields(category, self.config.options.extended)
                .into_iter()
                .partition(|name| *name == EVIDENCE);
            let prefix: String = optional.iter().map(|name| format!("[{}{}]", name, separator)).collect();
            let fields = prefix + &always.join(&separator);
            (category.output_key().to_string(), format!("{}. Format: {}", category.description(), fields))
        }).collect()
    }
}

impl Plugin for Mutfunc<DirStore> {
    fn configure<S: AsRef<str>>(
        params: &[S],
    ) -> Result<Self, E> {
        let config = MutfuncConfig::from_params(params)?;
        let Some(db) = config.db.clone() else {
            return Err(Box::new(ConfigError::MissingDatabase))
        };
        log::info!("Reading mutfunc matrices from {}", db.display());
        Ok(Mutfunc::with_store(DirStore::new(db), config))
    }

    fn annotate(
        &mut self,
        variant: &VariantContext,
    ) -> Result<Option<Rendered>, E> {
        Mutfunc::annotate(self, variant)
    }

    fn describe_fields(&self) -> IndexMap<String, String> {
        Mutfunc::describe_fields(self)
    }
}
