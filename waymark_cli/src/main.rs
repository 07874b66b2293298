// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `waymark`: build the search index, query it, prepare the map and preview
//! the map viewport from the command line.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kurbo::{Point, Size};
use waymark_panzoom::{LayoutMode, PanZoomConfig, PanZoomController};
use waymark_site::{
    DEFAULT_INDEX_FILE, DEFAULT_MAP_OUTPUT, DEFAULT_MAP_SOURCE, DEFAULT_MAX_WIDTH, IndexOptions,
    build_index, handle_search, prepare_map, read_index, search_index, write_index,
};

#[derive(Parser, Debug)]
#[command(name = "waymark", version, about = "Tools for a Waymark site")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a JSON search index of every article in a directory.
    BuildIndex {
        /// Directory of `*.html` articles.
        #[arg(long, default_value = "docs")]
        dir: PathBuf,
        /// Index path; defaults to `search-index.json` inside `--dir`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Index the search-results page too.
        #[arg(long)]
        include_all: bool,
        /// Extra file names to leave out.
        #[arg(long = "exclude", value_name = "FILE")]
        excluded: Vec<String>,
    },
    /// Search articles and print the JSON response.
    Search {
        /// Text to look for, case-insensitively.
        query: String,
        /// Directory of `*.html` articles.
        #[arg(long, default_value = "docs")]
        dir: PathBuf,
        /// Search a prebuilt index file instead of the articles.
        #[arg(long, conflicts_with = "dir")]
        index: Option<PathBuf>,
    },
    /// Shrink the source map to a web-friendly width.
    ResizeMap {
        /// Full-size source image.
        #[arg(long, default_value = DEFAULT_MAP_SOURCE)]
        input: PathBuf,
        /// Where the published map is written.
        #[arg(long, default_value = DEFAULT_MAP_OUTPUT)]
        output: PathBuf,
        /// Widest allowed output, in pixels.
        #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
        max_width: u32,
    },
    /// Print the initial map transform for a window and map size.
    View {
        /// Viewport size as `WIDTHxHEIGHT`.
        #[arg(long, value_parser = parse_size)]
        viewport: Size,
        /// Natural map size as `WIDTHxHEIGHT`.
        #[arg(long, value_parser = parse_size)]
        content: Size,
        /// Window width used to pick the layout; defaults to the viewport width.
        #[arg(long)]
        window_width: Option<f64>,
        /// Apply one wheel step at the viewport center (negative zooms in).
        #[arg(long, allow_hyphen_values = true)]
        wheel: Option<f64>,
        /// JSON file with controller settings.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_size(text: &str) -> Result<Size, String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{text}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad dimension `{v}`: {e}"))
    };
    Ok(Size::new(parse(w)?, parse(h)?))
}

fn run_build_index(
    dir: &Path,
    output: Option<PathBuf>,
    include_all: bool,
    excluded: Vec<String>,
) -> Result<()> {
    let base = if include_all {
        IndexOptions::include_all()
    } else {
        IndexOptions::default()
    };
    let options = excluded
        .into_iter()
        .fold(base, |options, name| options.exclude(name));
    let entries = build_index(dir, &options)
        .with_context(|| format!("indexing {}", dir.display()))?;
    let output = output.unwrap_or_else(|| dir.join(DEFAULT_INDEX_FILE));
    write_index(&entries, &output)?;
    println!("indexed {} pages into {}", entries.len(), output.display());
    Ok(())
}

fn run_search(query: &str, dir: &Path, index: Option<&Path>) -> Result<ExitCode> {
    if let Some(index) = index {
        let entries = read_index(index).with_context(|| format!("reading {}", index.display()))?;
        println!("{}", serde_json::to_string_pretty(&search_index(&entries, query))?);
        return Ok(ExitCode::SUCCESS);
    }
    let response = handle_search(dir, query);
    println!("{}", response.body);
    Ok(if response.status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(path: Option<&Path>) -> Result<PanZoomConfig> {
    let Some(path) = path else {
        return Ok(PanZoomConfig::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn run_view(
    viewport: Size,
    content: Size,
    window_width: Option<f64>,
    wheel: Option<f64>,
    config: PanZoomConfig,
) -> Result<()> {
    let layout = LayoutMode::from_window_width(
        window_width.unwrap_or(viewport.width),
        LayoutMode::DEFAULT_BREAKPOINT,
    );
    let mut map = PanZoomController::new(config);
    if !map.initialize(viewport, content, layout) {
        bail!("viewport {viewport:?} and content {content:?} must both be positive");
    }
    if let Some(delta_y) = wheel {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        map.wheel(center, delta_y);
    }

    let mut now = 0.0;
    while map.wants_frame() {
        now += 1000.0 / 60.0;
        map.on_frame(now);
    }
    let Some(transform) = map.published() else {
        bail!("no transform was published");
    };
    tracing::debug!(info = ?map.debug_info(), "view settled");

    println!("layout:    {layout:?}");
    if let Some(bounds) = map.bounds() {
        println!("bounds:    {:.4} ..= {:.4}", bounds.min, bounds.max);
    }
    println!("transform: {}", transform.css());
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::BuildIndex {
            dir,
            output,
            include_all,
            excluded,
        } => run_build_index(&dir, output, include_all, excluded)?,
        Command::Search { query, dir, index } => {
            return run_search(&query, &dir, index.as_deref());
        }
        Command::ResizeMap {
            input,
            output,
            max_width,
        } => {
            let (width, height) = prepare_map(&input, &output, max_width)?;
            println!("wrote {} ({width}x{height})", output.display());
        }
        Command::View {
            viewport,
            content,
            window_width,
            wheel,
            config,
        } => run_view(
            viewport,
            content,
            window_width,
            wheel,
            load_config(config.as_deref())?,
        )?,
    }
    Ok(ExitCode::SUCCESS)
}
