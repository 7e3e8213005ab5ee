use std::io::Cursor;
use std::path::PathBuf;

use wayline_cli::terminal::Terminal;
use wayline_core::{Coordinates, Location, Route, Store};

/// Create a test route whose distance equals `span`
#[allow(dead_code)]
pub fn route_with_distance(name: &str, span: i64) -> Route {
    let from = Location::new(0, 0, 0.0, "start").unwrap();
    let to = Location::new(span, 0, 0.0, "finish").unwrap();
    Route::new(name, Coordinates::new(0, 0), from, to).unwrap()
}

/// Build a terminal over in-memory streams
///
/// `input` feeds both interactive element assembly and confirmation
/// prompts; the collection path points nowhere (tests that save use a
/// tempdir-backed terminal instead).
#[allow(dead_code)]
pub fn terminal_with_input(store: Store, input: &str) -> Terminal<Cursor<String>, Vec<u8>> {
    terminal_at(store, PathBuf::from("collection.json"), input)
}

/// Build a terminal with an explicit collection path
#[allow(dead_code)]
pub fn terminal_at(
    store: Store,
    collection_path: PathBuf,
    input: &str,
) -> Terminal<Cursor<String>, Vec<u8>> {
    Terminal::new(
        store,
        collection_path,
        Cursor::new(input.to_string()),
        Vec::new(),
    )
}

/// The six interactive lines that assemble one element
///
/// Name, position X/Y, starting point X/Y/Z and name, destination point
/// X/Y/Z and name. `span` becomes the route distance.
#[allow(dead_code)]
pub fn element_input(name: &str, span: i64) -> String {
    format!("{name}\n1, 2\n0, 0, 0\nPier\n{span}, 0, 0\nLighthouse\n")
}

/// Rendered terminal output so far
#[allow(dead_code)]
pub fn output_text<R: std::io::BufRead>(terminal: &Terminal<R, Vec<u8>>) -> String {
    String::from_utf8_lossy(terminal.output()).into_owned()
}
