//! msgflow CLI - Draw ASCII message-flow diagrams from log output

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();
    let app = cli::MsgFlowApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
