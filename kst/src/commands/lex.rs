//! Lex command implementation.
//!
//! Reads each input file, runs the lexer over it and prints the token
//! stream as text or JSON. Files are lexed in parallel on a dedicated
//! rayon pool and printed in the order they were given.

use std::path::{Path, PathBuf};
use std::time::Instant;

use kestrel_lex::{Lexer, Token};
use kestrel_util::LineIndex;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commands::common::{error_messages, output_messages, validate_input_files, OutputFormat};
use crate::commands::traits::Command;
use crate::config::{Config, LexConfig};
use crate::error::{KstError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Print trivia alongside each token.
    pub show_trivia: bool,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Parallel jobs override.
    pub jobs: Option<usize>,
    /// Fail on malformed tokens.
    pub deny_invalid: bool,
    /// Configuration loaded for this run.
    pub config: Config,
}

/// One token with owned text and resolved position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Token type name.
    pub kind: &'static str,
    /// Token text.
    pub value: String,
    /// Whitespace and comments in front of the token.
    pub trivia: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`.
    pub column: usize,
    #[serde(skip)]
    is_error: bool,
}

/// The token stream of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Tokens up to and including `Eof`.
    pub tokens: Vec<TokenRecord>,
}

impl FileTokens {
    /// Number of `Invalid` and unterminated tokens.
    pub fn error_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_error).count()
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = Vec<FileTokens>;

    fn new(args: LexArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Vec<FileTokens>> {
        validate_input_files(&self.args.files)?;
        let settings = self.get_lex_config();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.jobs)
            .build()
            .map_err(|e| {
                KstError::CommandExecution(format!("{}: {}", error_messages::THREAD_POOL, e))
            })?;

        debug!("Lexing {} file(s) on {} thread(s)", self.args.files.len(), settings.jobs);
        pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| lex_file(path))
                .collect::<Result<Vec<_>>>()
        })
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl LexCommand {
    /// Lex, print, and enforce `deny_invalid`.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let settings = self.get_lex_config();

        let files = self.execute()?;
        print!("{}", render(&files, &settings)?);

        let errors: usize = files.iter().map(FileTokens::error_count).sum();
        info!(
            "{}: {} file(s) in {:.2}s",
            Self::name(),
            files.len(),
            start_time.elapsed().as_secs_f64()
        );

        if errors > 0 {
            if settings.deny_invalid {
                return Err(KstError::Lex(format!(
                    "{} {}",
                    errors,
                    error_messages::MALFORMED_TOKENS
                )));
            }
            warn!("{} {}", errors, error_messages::MALFORMED_TOKENS);
        }
        Ok(())
    }

    /// Merge command-line overrides into the configured lex settings.
    fn get_lex_config(&self) -> LexConfig {
        let base = &self.args.config.lex;
        LexConfig {
            show_trivia: self.args.show_trivia || base.show_trivia,
            format: self.args.format.unwrap_or(base.format),
            jobs: self.args.jobs.unwrap_or(base.jobs).max(1),
            deny_invalid: self.args.deny_invalid || base.deny_invalid,
        }
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    LexCommand::new(args).run()
}

fn lex_file(path: &Path) -> Result<FileTokens> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        KstError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let tokens = lex_source(&source)?;
    debug!("{}: {} token(s)", path.display(), tokens.len());
    Ok(FileTokens {
        path: path.to_path_buf(),
        tokens,
    })
}

/// Lex a whole source string into owned records, `Eof` included.
pub fn lex_source(source: &str) -> Result<Vec<TokenRecord>> {
    let index = LineIndex::new(source);
    let mut lexer = Lexer::new(source);
    let mut records = Vec::new();
    loop {
        let token = lexer.next_token();
        records.push(to_record(&token, &index)?);
        if token.is_eof() {
            return Ok(records);
        }
    }
}

fn to_record(token: &Token<'_>, index: &LineIndex) -> Result<TokenRecord> {
    let span = token.span();
    let (line, column) = index
        .line_col(span.start)
        .map_err(|e| KstError::CommandExecution(e.to_string()))?;
    Ok(TokenRecord {
        kind: token.name(),
        value: token.value().to_string(),
        trivia: token.trivia().to_string(),
        start: span.start,
        end: span.end,
        line,
        column,
        is_error: token.kind().is_error(),
    })
}

/// Render lexed files in the configured format.
pub fn render(files: &[FileTokens], settings: &LexConfig) -> Result<String> {
    match settings.format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(files)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(render_text(files, settings.show_trivia)),
    }
}

fn render_text(files: &[FileTokens], show_trivia: bool) -> String {
    let mut out = String::new();
    for file in files {
        if files.len() > 1 {
            out.push_str(output_messages::FILE_HEADER_OPEN);
            out.push_str(&file.path.display().to_string());
            out.push_str(output_messages::FILE_HEADER_CLOSE);
            out.push('\n');
        }
        for token in &file.tokens {
            out.push_str(&format!("{} {} {:?}", token.start, token.kind, token.value));
            if show_trivia {
                out.push_str(&format!(" trivia={:?}", token.trivia));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(format: OutputFormat, show_trivia: bool) -> LexConfig {
        LexConfig {
            show_trivia,
            format,
            jobs: 1,
            deny_invalid: false,
        }
    }

    #[test]
    fn test_lex_source_positions() {
        let records = lex_source("let x\n  = 1;").unwrap();
        let eq = &records[2];
        assert_eq!(eq.kind, "Equals");
        assert_eq!((eq.start, eq.end), (8, 9));
        assert_eq!((eq.line, eq.column), (2, 3));
        assert_eq!(eq.trivia, "\n  ");
        assert_eq!(records.last().map(|r| r.kind), Some("Eof"));
    }

    #[test]
    fn test_lex_source_counts_errors() {
        let file = FileTokens {
            path: PathBuf::from("x.ks"),
            tokens: lex_source("a @ \"open").unwrap(),
        };
        assert_eq!(file.error_count(), 2);
    }

    #[test]
    fn test_render_text_single_file() {
        let files = vec![FileTokens {
            path: PathBuf::from("a.ks"),
            tokens: lex_source("a+=1").unwrap(),
        }];
        let text = render(&files, &settings(OutputFormat::Text, false)).unwrap();
        assert_eq!(
            text,
            "0 Identifier \"a\"\n1 PlusEquals \"+=\"\n3 NumericLiteral \"1\"\n4 Eof \"\"\n"
        );
    }

    #[test]
    fn test_render_text_with_trivia_and_headers() {
        let files = vec![
            FileTokens {
                path: PathBuf::from("a.ks"),
                tokens: lex_source(" x").unwrap(),
            },
            FileTokens {
                path: PathBuf::from("b.ks"),
                tokens: lex_source("").unwrap(),
            },
        ];
        let text = render(&files, &settings(OutputFormat::Text, true)).unwrap();
        assert!(text.starts_with("==> a.ks <==\n1 Identifier \"x\" trivia=\" \"\n"));
        assert!(text.contains("==> b.ks <==\n0 Eof \"\" trivia=\"\"\n"));
    }

    #[test]
    fn test_render_json() {
        let files = vec![FileTokens {
            path: PathBuf::from("a.ks"),
            tokens: lex_source("null").unwrap(),
        }];
        let json = render(&files, &settings(OutputFormat::Json, false)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["path"], "a.ks");
        assert_eq!(parsed[0]["tokens"][0]["kind"], "NullLiteral");
        assert_eq!(parsed[0]["tokens"][0]["line"], 1);
        assert!(parsed[0]["tokens"][0].get("is_error").is_none());
    }

    #[test]
    fn test_execute_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..6)
            .map(|i| {
                let path = temp_dir.path().join(format!("f{}.ks", i));
                std::fs::write(&path, "x ".repeat(i + 1)).unwrap();
                path
            })
            .collect();

        let command = LexCommand::new(LexArgs {
            files: files.clone(),
            jobs: Some(3),
            ..LexArgs::default()
        });
        let result = command.execute().unwrap();

        assert_eq!(result.len(), 6);
        for (i, file) in result.iter().enumerate() {
            assert_eq!(file.path, files[i]);
            assert_eq!(file.tokens.len(), i + 2);
        }
    }

    #[test]
    fn test_execute_missing_file() {
        let command = LexCommand::new(LexArgs {
            files: vec![PathBuf::from("/nonexistent/file.ks")],
            ..LexArgs::default()
        });
        assert!(matches!(command.execute(), Err(KstError::FileOperation(_))));
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        config.lex.format = OutputFormat::Json;
        config.lex.jobs = 8;

        let command = LexCommand::new(LexArgs {
            format: Some(OutputFormat::Text),
            jobs: Some(2),
            deny_invalid: true,
            config,
            ..LexArgs::default()
        });
        let merged = command.get_lex_config();
        assert_eq!(merged.format, OutputFormat::Text);
        assert_eq!(merged.jobs, 2);
        assert!(merged.deny_invalid);
    }

    #[test]
    fn test_run_denies_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.ks");
        std::fs::write(&path, "let # = 1;").unwrap();

        let result = run_lex(LexArgs {
            files: vec![path],
            deny_invalid: true,
            ..LexArgs::default()
        });
        assert!(matches!(result, Err(KstError::Lex(_))));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(LexCommand::name(), "lex");
    }
}
