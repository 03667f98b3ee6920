//! rltab - Terminal Data Table Viewer
//!
//! Load a JSON dataset, filter it interactively, and page through the results.

use anyhow::Result;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("rltab")
        .version(rltab::VERSION)
        .about("A terminal viewer for tabular JSON datasets")
        .long_about(
            "rltab loads a JSON array of records and lets you filter it by group, \
             name, and code with debounced text input, page through the matches, \
             and export the filtered set as a dated JSON file.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the JSON dataset to view")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .help("Records shown per page")
                .value_parser(value_parser!(usize))
                .default_value("10"),
        )
        .get_matches();

    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );
    let page_size = *matches
        .get_one::<usize>("page-size")
        .expect("page-size has a default");

    if page_size == 0 {
        anyhow::bail!("page size must be at least 1");
    }

    use rltab::render::table_ui::TerminalTableUi;
    use rltab::{Application, JsonFileSource};

    // Validates the path before the terminal enters raw mode
    let source = JsonFileSource::new(&file_path)?;

    let sink = Box::new(TerminalTableUi::new()?);
    let mut app = Application::new(Box::new(source), sink).with_page_size(page_size);

    app.run().await?;

    Ok(())
}
