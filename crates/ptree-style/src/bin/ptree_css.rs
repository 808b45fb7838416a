#![forbid(unsafe_code)]

//! Print the resolved highlight styles for one process-tree node.

use std::env;
use std::error::Error;

use ptree_style::{NodeVisualState, TerminalRowStyle, css, default_canvas, resolve};
use ptree_theme::{ColorProfile, Rgba, TermColor, ThemeConfig, ThemeError, ThemeMode};

const DEFAULT_CELL_WIDTH_PX: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Css,
    Json,
    Terminal,
}

struct Options {
    state: NodeVisualState,
    theme: Option<ThemeMode>,
    format: Format,
    prefix: String,
    canvas: Option<String>,
    profile: Option<ColorProfile>,
    cell_width: Option<f32>,
}

fn print_usage() {
    eprintln!(
        "Usage: ptree_css [--depth N] [--alerts] [--investigated] [--theme light|dark]\n\
         \x20                [--format css|json|terminal] [--prefix NAME]\n\
         \x20                [--profile truecolor|256|16|mono]\n\
         \x20                [--canvas #rrggbb] [--cell-width PX]   (terminal format only)\n\
         \n\
         Environment: PTREE_THEME, PTREE_THEME_FILE, PTREE_COLOR_PROFILE, PTREE_LOG\n\
         \n\
         Example:\n\
           ptree_css --depth 3 --alerts --investigated --theme light --format css"
    );
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args() -> Result<Options, String> {
    let mut args = env::args().skip(1);
    let mut opts = Options {
        state: NodeVisualState::default(),
        theme: None,
        format: Format::Css,
        prefix: "ptree".to_string(),
        canvas: None,
        profile: None,
        cell_width: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" => {
                opts.state.depth = value(&mut args, "--depth")?
                    .parse::<u32>()
                    .map_err(|_| "invalid --depth value".to_string())?;
            }
            "--alerts" => opts.state.has_alerts = true,
            "--investigated" => opts.state.has_investigated_alert = true,
            "--theme" => {
                let raw = value(&mut args, "--theme")?;
                opts.theme = Some(
                    ThemeMode::parse(&raw).ok_or_else(|| format!("invalid --theme value: {raw}"))?,
                );
            }
            "--format" => {
                opts.format = match value(&mut args, "--format")?.as_str() {
                    "css" => Format::Css,
                    "json" => Format::Json,
                    "terminal" => Format::Terminal,
                    other => return Err(format!("invalid --format value: {other}")),
                };
            }
            "--prefix" => {
                let prefix = value(&mut args, "--prefix")?;
                if prefix.is_empty() {
                    return Err("--prefix must not be empty".to_string());
                }
                opts.prefix = prefix;
            }
            "--canvas" => opts.canvas = Some(value(&mut args, "--canvas")?),
            "--profile" => {
                let raw = value(&mut args, "--profile")?;
                opts.profile = Some(
                    ColorProfile::parse(&raw)
                        .ok_or_else(|| format!("invalid --profile value: {raw}"))?,
                );
            }
            "--cell-width" => {
                let width = value(&mut args, "--cell-width")?
                    .parse::<f32>()
                    .map_err(|_| "invalid --cell-width value".to_string())?;
                if !(width.is_finite() && width > 0.0) {
                    return Err("--cell-width must be > 0".to_string());
                }
                opts.cell_width = Some(width);
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    if opts.format != Format::Terminal {
        if opts.canvas.is_some() {
            return Err("--canvas requires --format terminal".to_string());
        }
        if opts.cell_width.is_some() {
            return Err("--cell-width requires --format terminal".to_string());
        }
    }

    Ok(opts)
}

fn describe(color: Option<TermColor>) -> String {
    match color {
        None => "-".to_string(),
        Some(TermColor::Rgb(r, g, b)) => format!("rgb({r}, {g}, {b})"),
        Some(TermColor::Indexed256(i)) => format!("256:{i}"),
        Some(TermColor::Indexed16(i)) => format!("16:{i}"),
        Some(TermColor::Mono(m)) => format!("mono:{m:?}").to_lowercase(),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_args().inspect_err(|_| {
        print_usage();
    })?;

    #[cfg(feature = "tracing-json")]
    ptree_theme::logging::try_init_json();

    let parsed = ThemeConfig::from_env_with_diagnostics();
    for err in &parsed.errors {
        eprintln!("ptree_css: ignoring {err}");
    }
    let mut config = parsed.config;
    if let Some(mode) = opts.theme {
        config.mode = mode;
    }
    if let Some(profile) = opts.profile {
        config.color_profile = profile;
    }
    let theme = config.load_tokens()?;
    let result = resolve(opts.state, &theme);

    match opts.format {
        Format::Css => print!("{}", css::to_stylesheet(&opts.prefix, &result)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Terminal => {
            let canvas = match &opts.canvas {
                Some(raw) => Rgba::parse_hex(raw).map_err(ThemeError::from)?,
                None => default_canvas(config.mode),
            };
            let row = TerminalRowStyle::from_result(
                &result,
                canvas,
                config.color_profile,
                opts.cell_width.unwrap_or(DEFAULT_CELL_WIDTH_PX),
            );
            println!("{}", config.summary_short());
            println!("canvas:     {canvas}");
            println!("gutter:     {}", describe(row.gutter));
            println!("background: {}", describe(row.row_background));
            println!("hover:      {}", describe(row.hover_background));
            println!("text:       {}", describe(row.text));
            println!("indent:     {} cols", row.indent_columns);
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ptree_css error: {err}");
        std::process::exit(1);
    }
}
