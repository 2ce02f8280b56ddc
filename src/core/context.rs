use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        data::{Documentation, FileDocumentation},
        file_scanner::scan_files,
        handlers::{HandlerKind, default_handlers},
        options::AnalyzeOptions,
        parse::document_module,
        parsers::parse_jsx_source,
    },
    issues::ParseErrorIssue,
};

/// Output of a documentation run, sorted by file path.
#[derive(Debug, Default)]
pub struct DocgenResults {
    /// Files defining at least one component.
    pub files: Vec<FileDocumentation>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl DocgenResults {
    pub fn component_count(&self) -> usize {
        self.files.iter().map(|file| file.components.len()).sum()
    }
}

/// Configuration and file set for one documentation run.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--validator-module`)
/// 2. `.propdocrc.json` config file
/// 3. Built-in defaults
pub struct DocgenContext {
    pub config: Config,
    /// Source root; reported paths are relative to it.
    pub root_dir: PathBuf,
    pub files: BTreeSet<String>,
    pub options: AnalyzeOptions,
    pub verbose: bool,
    handlers: Vec<HandlerKind>,
}

impl DocgenContext {
    /// Load configuration from the source root and scan for source files.
    ///
    /// # Errors
    ///
    /// Returns error if the source root is not valid UTF-8 or the config file
    /// is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        match &config_result.path {
            Some(config_path) => tracing::debug!(path = %config_path.display(), "loaded config"),
            None if verbose => {
                eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME)
            }
            None => {}
        }

        let mut config = config_result.config;
        for module in &common_args.validator_modules {
            if !config.validator_modules.contains(module) {
                config.validator_modules.push(module.clone());
            }
        }

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        tracing::debug!(count = scan_result.files.len(), "scanned source files");

        let options = AnalyzeOptions::with_validator_modules(config.validator_modules.clone());

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            options,
            verbose,
            handlers: default_handlers(),
        })
    }

    /// Read, parse and document all scanned files in parallel.
    ///
    /// Each file gets its own `SourceMap`, so no AST crosses threads. Files
    /// that fail to read or parse become [`ParseErrorIssue`]s.
    pub fn document(&self) -> DocgenResults {
        let outcomes: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (self.relative_path(file_path), self.document_file(file_path)))
            .collect();

        let mut results = DocgenResults::default();
        for (file_path, outcome) in outcomes {
            match outcome {
                Ok(components) if components.is_empty() => {}
                Ok(components) => results.files.push(FileDocumentation {
                    file_path,
                    components,
                }),
                Err(e) => {
                    tracing::debug!(file = %file_path, error = %e, "skipping file");
                    results.parse_errors.push(ParseErrorIssue {
                        file_path,
                        error: e.to_string(),
                    });
                }
            }
        }

        results.files.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        results.parse_errors.sort();
        results
    }

    fn document_file(&self, file_path: &str) -> Result<Vec<Documentation>> {
        let code = std::fs::read_to_string(file_path)
            .map_err(|e| anyhow!("Failed to read file: {}", e))?;
        let parsed = parse_jsx_source(code, file_path, Arc::new(SourceMap::default()))?;
        Ok(document_module(&parsed, &self.options, &self.handlers))
    }

    /// `file_path` relative to the source root, with `/` separators.
    fn relative_path(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
