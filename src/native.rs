//! Terminal front-end.
//!
//! Loads a manifest from disk, prints the grid and lightbox to stdout and
//! reads line commands from stdin, so the gallery can be driven without a
//! browser.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use folio_core::manifest::load_manifest_file;
use folio_core::prelude::*;
use folio_core::ConfigError;

use crate::config;

const HELP: &str = "\
folio-native - browse a portfolio manifest in the terminal

USAGE:
    folio-native [OPTIONS] [MANIFEST]

OPTIONS:
    --config PATH     Read configuration from PATH
    --filter TOKEN    Apply a category filter after loading
    --init-config     Write the default configuration and exit
    --dump-config     Print the effective configuration and exit
    -h, --help        Print this help

COMMANDS (stdin):
    filter <token>    Show only images in a category ('all' for everything)
    filters           List available category tokens
    open <n>          Open the lightbox at grid position n
    next | prev       Move within the lightbox
    close             Close the lightbox
    key <Name>        Send a key press (Escape, ArrowLeft, ArrowRight)
    submit            Submit the contact form
    goto <#anchor>    Scroll to a page section
    help              Show the command list
    quit              Exit
";

/// Errors that end the native front-end.
#[derive(Debug, thiserror::Error)]
pub enum NativeError {
    /// Bad command line
    #[error("Invalid arguments: {0}")]
    Args(#[from] pico_args::Error),

    /// Configuration could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub filter: Option<String>,
    pub init_config: bool,
    pub dump_config: bool,
    pub help: bool,
    pub manifest: Option<PathBuf>,
}

fn parse_path(s: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(s.into())
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse(args: Vec<OsString>) -> Result<Self, NativeError> {
        let mut pargs = pico_args::Arguments::from_vec(args);

        let parsed = Self {
            help: pargs.contains(["-h", "--help"]),
            init_config: pargs.contains("--init-config"),
            dump_config: pargs.contains("--dump-config"),
            config: pargs.opt_value_from_os_str("--config", parse_path)?,
            filter: pargs.opt_value_from_str("--filter")?,
            manifest: pargs.opt_free_from_os_str(parse_path)?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            log::warn!("Ignoring extra arguments: {:?}", remaining);
        }
        Ok(parsed)
    }
}

/// One line of user input.
#[derive(Debug)]
pub enum Command {
    /// Forward to the gallery
    Dispatch(Message),
    /// List category tokens
    Filters,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandError(String);

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a command line typed on stdin. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let require = |what: &str| {
        if rest.is_empty() {
            Err(CommandError(format!("'{}' needs {}", verb, what)))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match verb.to_lowercase().as_str() {
        "filter" => require("a token").map(|t| Command::Dispatch(Message::FilterSelected(t))),
        "filters" => Ok(Command::Filters),
        "open" => rest
            .parse::<usize>()
            .map(|n| Command::Dispatch(Message::ItemClicked(n)))
            .map_err(|_| CommandError(format!("'{}' is not a grid position", rest))),
        "next" => Ok(Command::Dispatch(Message::Navigate(Direction::Next))),
        "prev" | "previous" => Ok(Command::Dispatch(Message::Navigate(Direction::Previous))),
        "close" => Ok(Command::Dispatch(Message::CloseRequested)),
        "key" => require("a key name").map(|k| Command::Dispatch(Message::KeyPressed(k))),
        "submit" => Ok(Command::Dispatch(Message::FormSubmitted)),
        "goto" => require("an anchor").map(|a| Command::Dispatch(Message::AnchorClicked(a))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError(format!("Unknown command '{}'", other))),
    };
    Some(command)
}

/// Page sections the terminal view pretends to have.
pub const DEFAULT_SECTIONS: &[&str] = &["#home", "#portfolio", "#about", "#contact"];

/// A `GalleryView` that prints to any writer.
pub struct TerminalView<W: Write> {
    out: W,
    sections: Vec<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> GalleryView for TerminalView<W> {
    fn render_grid(&mut self, entries: &[GridEntry]) {
        self.emit(format_args!("Grid: {} image(s)", entries.len()));
        for entry in entries {
            if entry.category_label.is_empty() {
                self.emit(format_args!("  [{}] {} ({})", entry.position, entry.title, entry.image_src));
            } else {
                self.emit(format_args!(
                    "  [{}] {} [{}] ({})",
                    entry.position, entry.title, entry.category_label, entry.image_src
                ));
            }
            if !entry.description.is_empty() {
                self.emit(format_args!("      {}", entry.description));
            }
        }
    }

    fn set_active_filter(&mut self, filter: &FilterToken) {
        self.emit(format_args!("Filter: {}", filter));
    }

    fn show_modal(&mut self, content: &ModalContent) {
        self.emit(format_args!(
            "Lightbox {}/{}: {} ({})",
            content.position + 1,
            content.total,
            content.title,
            content.image_src
        ));
        if !content.description.is_empty() {
            self.emit(format_args!("  {}", content.description));
        }
        self.emit(format_args!("  {}", content.camera_info));
        if !content.details.is_empty() {
            self.emit(format_args!("  {}", content.details_line()));
        }
    }

    fn hide_modal(&mut self) {
        self.emit(format_args!("Lightbox closed"));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        log::trace!("Scroll locked: {}", locked);
    }

    fn acknowledge(&mut self, message: &str) {
        self.emit(format_args!("{}", message));
    }

    fn reset_form(&mut self) {
        log::debug!("Contact form reset");
    }

    fn scroll_to(&mut self, target: &str) -> bool {
        if self.sections.iter().any(|s| s == target) {
            self.emit(format_args!("Scrolled to {}", target));
            true
        } else {
            false
        }
    }
}

fn init_logging(config: &GalleryConfig) {
    // RUST_LOG still overrides the configured level
    let _ = env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .try_init();
}

/// Load the manifest from disk into the gallery. Failures are logged, not fatal.
pub fn load_into<V: GalleryView>(gallery: &mut Gallery, path: &Path, view: &mut V) {
    let message = match load_manifest_file(path) {
        Ok(manifest) => Message::ManifestLoaded(manifest),
        Err(e) => Message::ManifestFailed(e),
    };
    gallery.update(message, view);
}

/// Run commands from `input` until it ends or `quit` is read.
pub fn run_commands<R: BufRead, W: Write>(
    gallery: &mut Gallery,
    view: &mut TerminalView<W>,
    input: R,
) -> Result<(), NativeError> {
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            None => {}
            Some(Ok(Command::Dispatch(message))) => gallery.update(message, view),
            Some(Ok(Command::Filters)) => {
                let tokens = gallery.catalog().category_tokens();
                view.emit(format_args!("Filters: all {}", tokens.join(" ")));
            }
            Some(Ok(Command::Help)) => view.emit(format_args!("{}", HELP)),
            Some(Ok(Command::Quit)) => break,
            Some(Err(e)) => view.emit(format_args!("{}", e)),
        }
    }
    Ok(())
}

/// Entry point of `folio-native`.
pub fn run() -> Result<(), NativeError> {
    let args = CliArgs::parse(std::env::args_os().skip(1).collect())?;
    if args.help {
        print!("{}", HELP);
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?;
    init_logging(&config);

    if args.init_config {
        let path = config::require_default_path()?;
        if config::save_if_absent(&path, &GalleryConfig::default())? {
            println!("Wrote default configuration to {}", path.display());
        } else {
            println!("Configuration already exists at {}, left unchanged", path.display());
        }
        return Ok(());
    }
    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let manifest_path = args
        .manifest
        .unwrap_or_else(|| PathBuf::from(&config.manifest_url));

    let mut gallery = Gallery::new(&config);
    let mut view = TerminalView::new(io::stdout().lock());
    load_into(&mut gallery, &manifest_path, &mut view);

    if let Some(filter) = args.filter {
        gallery.update(Message::FilterSelected(filter), &mut view);
    }

    run_commands(&mut gallery, &mut view, io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{"images": [
        {"filename": "a.jpg", "title": "A", "description": "First", "categories": [{"name": "Nature"}],
         "camera_make": "Canon", "lens": "50mm", "aperture": "1.8", "iso": 200,
         "shutter_speed": "1/250", "location": "Oslo"},
        {"filename": "b.jpg", "title": "B", "categories": [{"name": "Urban"}]}
    ]}"#;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    fn loaded() -> (Gallery, TerminalView<Vec<u8>>) {
        let mut gallery = Gallery::new(&GalleryConfig::default());
        let mut view = TerminalView::new(Vec::new());
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        gallery.update(Message::ManifestLoaded(manifest), &mut view);
        (gallery, view)
    }

    #[test]
    fn test_cli_args() {
        let args = CliArgs::parse(os(&["--filter", "nature", "--config", "c.json", "p.json"])).unwrap();
        assert_eq!(args.filter.as_deref(), Some("nature"));
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        assert_eq!(args.manifest, Some(PathBuf::from("p.json")));
        assert!(!args.help);

        let args = CliArgs::parse(os(&["-h"])).unwrap();
        assert!(args.help);
        assert_eq!(args.manifest, None);
    }

    #[test]
    fn test_parse_commands() {
        assert!(parse_command("   ").is_none());
        assert!(matches!(
            parse_command("filter Nature"),
            Some(Ok(Command::Dispatch(Message::FilterSelected(t)))) if t == "Nature"
        ));
        assert!(matches!(
            parse_command("open 3"),
            Some(Ok(Command::Dispatch(Message::ItemClicked(3))))
        ));
        assert!(matches!(
            parse_command("prev"),
            Some(Ok(Command::Dispatch(Message::Navigate(Direction::Previous))))
        ));
        assert!(matches!(
            parse_command("key Escape"),
            Some(Ok(Command::Dispatch(Message::KeyPressed(k)))) if k == "Escape"
        ));
        assert!(matches!(parse_command("QUIT"), Some(Ok(Command::Quit))));
        assert!(matches!(parse_command("open x"), Some(Err(_))));
        assert!(matches!(parse_command("filter"), Some(Err(_))));
        assert!(matches!(parse_command("dance"), Some(Err(_))));
    }

    #[test]
    fn test_terminal_grid_output() {
        let (_, view) = loaded();
        let out = output(view);
        assert!(out.contains("Filter: all"));
        assert!(out.contains("Grid: 2 image(s)"));
        assert!(out.contains("[0] A [Nature] (/static/a.jpg)"));
        assert!(out.contains("      First"));
    }

    #[test]
    fn test_command_session() {
        let (mut gallery, mut view) = loaded();
        let script = "filter nature\nopen 0\nnext\nkey Escape\nfilters\nsubmit\ngoto #about\nquit\nopen 1\n";
        run_commands(&mut gallery, &mut view, script.as_bytes()).unwrap();

        let out = output(view);
        assert!(out.contains("Grid: 1 image(s)"));
        assert!(out.contains("Lightbox 1/1: A (/static/a.jpg)"));
        assert!(out.contains("Canon | 50mm | f/1.8 | ISO 200"));
        assert!(out.contains("Shutter: 1/250 · Location: Oslo"));
        assert!(out.contains("Lightbox closed"));
        assert!(out.contains("Filters: all nature urban"));
        assert!(out.contains("Thank you for your message!"));
        assert!(out.contains("Scrolled to #about"));
        assert!(!gallery.lightbox().is_open());
        assert!(!out.contains("Lightbox 1/1: B"));
    }

    #[test]
    fn test_missing_manifest_file_leaves_gallery_empty() {
        let mut gallery = Gallery::new(&GalleryConfig::default());
        let mut view = TerminalView::new(Vec::new());
        load_into(&mut gallery, Path::new("/nonexistent/folio/portfolio.json"), &mut view);

        assert!(gallery.catalog().is_empty());
        assert!(output(view).is_empty());
    }
}
