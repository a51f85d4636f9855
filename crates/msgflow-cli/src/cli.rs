//! Command-line interface for the msgflow utility
//!
//! Reads a whole input stream, draws the message-flow diagram, and writes it
//! out. Extra subcommands help while writing extraction rules.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use msgflow::core::logging::init_logging;
use msgflow::flow::{full_match_captures, ExtractionRule, MsgFlowDatabase};
use msgflow::{parse, render_lines};

/// msgflow - Draw ASCII message-flow diagrams from log output
#[derive(Parser)]
#[command(name = "msgflow")]
#[command(about = "Turn log lines into an ASCII message-flow diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Subcommand; without one, stdin is drawn to stdout
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [env: MSGFLOW_LOG_LEVEL]
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [env: MSGFLOW_LOG_FORMAT]
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the message-flow diagram
    Draw {
        /// Input file with directives and log lines (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the extraction rules declared in the input
    Validate {
        /// Input file to check (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the extracted message flows without drawing them
    Extract {
        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Full-match a text against a regex and print every capture group
    Captures {
        /// Regular expression
        #[arg(short, long)]
        pattern: String,

        /// Text to match
        #[arg(short, long)]
        text: String,
    },
}

/// Status of one extraction rule, as reported by `validate`
#[derive(Debug, Serialize)]
pub struct RuleStatus {
    pub index: usize,
    pub pattern: String,
    pub template: String,
    pub usable: bool,
    pub reason: Option<String>,
}

impl RuleStatus {
    fn from_rule(index: usize, rule: &ExtractionRule) -> Self {
        Self {
            index,
            pattern: rule.pattern().to_string(),
            template: rule.template().to_string(),
            usable: rule.is_usable(),
            reason: rule.rejection().map(|r| r.to_string()),
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct MsgFlowApp;

impl MsgFlowApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let log_level = cli.log_level.map(|l| l.as_str());
        let log_format = cli.log_format.map(|f| f.as_str());

        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("msgflow v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            None => self.draw_command(None, None, cli.verbose),
            Some(Commands::Draw { input, output }) => {
                self.draw_command(input, output, cli.verbose)
            }
            Some(Commands::Validate { input, json }) => {
                self.validate_command(input, json, cli.verbose)
            }
            Some(Commands::Extract { input, json }) => {
                self.extract_command(input, json, cli.verbose)
            }
            Some(Commands::Captures { pattern, text }) => self.captures_command(&pattern, &text),
        }
    }

    /// Handle the draw command
    fn draw_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let diagram = render_lines(content.lines());
        info!(bytes = diagram.len(), "Diagram drawn");
        self.write_output(output, &diagram)
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let database = self.parse_input(input, verbose)?;
        let statuses = self.rule_statuses(&database);

        if json {
            let report = serde_json::json!({
                "rules": statuses,
                "flows": database.flow_count(),
                "unmatched": database.annotation_count(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", self.format_statuses(&statuses, &database));
        }

        let rejected = statuses.iter().filter(|s| !s.usable).count();
        if rejected > 0 {
            return Err(anyhow!(
                "{} of {} extraction rules can never match",
                rejected,
                statuses.len()
            ));
        }
        Ok(())
    }

    /// Handle the extract command
    fn extract_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let database = self.parse_input(input, verbose)?;

        if json {
            println!("{}", serde_json::to_string_pretty(database.flows())?);
        } else {
            for flow in database.flows() {
                println!(
                    "{}\t{}\t{}\t{}",
                    flow.source, flow.destination, flow.message_id, flow.extra_info
                );
            }
        }
        Ok(())
    }

    /// Handle the captures command
    fn captures_command(&self, pattern: &str, text: &str) -> Result<()> {
        match full_match_captures(pattern, text)? {
            Some(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    println!("      ${} = \"{}\"", i, group);
                }
                Ok(())
            }
            None => Err(anyhow!("Text does not fully match the pattern")),
        }
    }

    fn parse_input(&self, input: Option<PathBuf>, verbose: bool) -> Result<MsgFlowDatabase> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        parse(&content)
    }

    fn rule_statuses(&self, database: &MsgFlowDatabase) -> Vec<RuleStatus> {
        database
            .config()
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleStatus::from_rule(i + 1, rule))
            .collect()
    }

    fn format_statuses(&self, statuses: &[RuleStatus], database: &MsgFlowDatabase) -> String {
        let mut out = String::new();
        if statuses.is_empty() {
            out.push_str("No extraction rules declared\n");
        }
        for status in statuses {
            match &status.reason {
                None => out.push_str(&format!("✓ rule {}: {}\n", status.index, status.pattern)),
                Some(reason) => out.push_str(&format!(
                    "✗ rule {}: {} ({})\n",
                    status.index, status.pattern, reason
                )),
            }
        }
        out.push_str(&format!(
            "{} message flows, {} unmatched lines\n",
            database.flow_count(),
            database.annotation_count()
        ));
        out
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => {
                debug!(path = %path.display(), "Reading input file");
                fs::read_to_string(&path)
                    .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e))
            }
            _ => {
                let lines = io::stdin()
                    .lines()
                    .collect::<io::Result<Vec<_>>>()?;
                Ok(lines.join("\n"))
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
