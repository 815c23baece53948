use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::canvas::CostCanvas;
use crate::config::load_config;
use crate::ir::{BillingGraph, demo_nodes};
use crate::parser::parse_nodes;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use crate::scene_dump::write_scene_dump;

#[derive(Parser, Debug)]
#[command(name = "costgraph", version, about = "Cost-tree layout and connector routing")]
pub struct Args {
    /// Input node list (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Render the built-in demo tree instead of reading input
    #[arg(long)]
    pub demo: bool,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme and card dimensions)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Region to select
    #[arg(long = "selectRegion")]
    pub select_region: Option<String>,

    /// Workspace to select (needs --selectRegion)
    #[arg(long = "selectWorkspace")]
    pub select_workspace: Option<String>,

    /// Zoom scale, clamped to the canvas bounds
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Write the computed scene as JSON
    #[arg(long = "dumpScene")]
    pub dump_scene: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let nodes = if args.demo {
        demo_nodes()
    } else {
        let input = read_input(args.input.as_deref())?;
        parse_nodes(&input)?
    };
    let graph = BillingGraph::from_nodes(nodes)?;

    let mut canvas = CostCanvas::new(graph);
    canvas.transform_mut().set_scale(args.scale);
    canvas.set_selection(
        args.select_region.as_deref(),
        args.select_workspace.as_deref(),
    );

    // paint pass first: routing needs measured boxes
    canvas.measure_headless(&config.layout);
    let scene = canvas.scene(&config.layout);

    if let Some(path) = args.dump_scene.as_deref() {
        write_scene_dump(path, &scene)?;
    }

    let svg = render_svg(&scene, &config.theme, &config.layout);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output, "png")?;
                write_output_png(&svg, &output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!("png output requires the `png` feature"));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
