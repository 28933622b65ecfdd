//! Drives sources through the whole pipeline.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    config::{ConfigError, Properties},
    errors::{errors::Error, report::Reporter},
    interpreter::interpreter::Interpreter,
    lexer::lexer::tokenize,
    parser::parser::parse,
    resolver::resolver::resolve,
};

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("{count} lexical error(s)")]
    Scan { count: usize },
    #[error("{count} syntax error(s)")]
    Parse { count: usize },
    #[error("{count} resolution error(s)")]
    Resolve { count: usize },
    #[error("runtime error: {0}")]
    Runtime(Error),
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One assembler run. Every source shares the same interpreter, so later
/// sources see the globals of earlier ones.
pub struct Assembler<'a> {
    reporter: Box<dyn Reporter + 'a>,
    dir: PathBuf,
    properties: Option<Properties>,
    interpreter: Interpreter<'a>,
}

impl<'a> Assembler<'a> {
    pub fn new(output: &'a mut dyn Write, reporter: Box<dyn Reporter + 'a>) -> Self {
        Assembler {
            reporter,
            dir: PathBuf::from("."),
            properties: None,
            interpreter: Interpreter::new(output),
        }
    }

    /// Loads `<dir>/config.json` and resolves later source paths against `dir`.
    pub fn configure(&mut self, dir: &Path) -> Result<&Properties, AssemblerError> {
        let properties = Properties::load(dir)?;
        self.dir = dir.to_path_buf();
        Ok(&*self.properties.insert(properties))
    }

    /// Runs every source listed in the loaded config, stopping at the first
    /// failure.
    pub fn run_configured(&mut self) -> Result<(), AssemblerError> {
        let files = self
            .properties
            .as_ref()
            .map(|properties| properties.files().to_vec())
            .unwrap_or_default();

        for file in files {
            self.run_file(&file)?;
        }

        Ok(())
    }

    pub fn run_file(&mut self, name: &str) -> Result<(), AssemblerError> {
        let path = self.dir.join(name);
        let source = fs::read_to_string(&path).map_err(|source| AssemblerError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(file = %path.display(), "assembling");
        self.run_source(&source)
    }

    pub fn run_source(&mut self, source: &str) -> Result<(), AssemblerError> {
        let (tokens, errors) = tokenize(source);
        if !errors.is_empty() {
            self.report_all(&errors);
            return Err(AssemblerError::Scan {
                count: errors.len(),
            });
        }

        let statements = parse(tokens).map_err(|errors| {
            self.report_all(&errors);
            AssemblerError::Parse {
                count: errors.len(),
            }
        })?;

        let resolution = resolve(&statements, &mut self.interpreter);
        self.report_all(&resolution.warnings);
        if !resolution.is_ok() {
            self.report_all(&resolution.errors);
            return Err(AssemblerError::Resolve {
                count: resolution.errors.len(),
            });
        }

        self.interpreter.interpret(&statements).map_err(|error| {
            self.reporter.report(&error);
            AssemblerError::Runtime(error)
        })
    }

    fn report_all(&mut self, errors: &[Error]) {
        for error in errors {
            self.reporter.report(error);
        }
    }
}
