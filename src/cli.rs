//! Command line interface for editing layout files.
//!
//! Every command works on a `.panels.json` document. Commands that change the
//! layout rewrite the file in place.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use panelkit_designer::{
    calculate_resize_gaps, render_page_svg, EditorSettings, EditorState, LayoutTemplate, SvgStyle,
};
use panelkit_settings::SettingsManager;

#[derive(Debug, Parser)]
#[command(
    name = "panelkit",
    about = "Comic page layout tool: templates, rotate and mirror, resizable gutters",
    version
)]
pub struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a layout file with pages from a template.
    New(NewArgs),

    /// List built-in page templates.
    Templates,

    /// Summarize a layout file.
    Info(FileArgs),

    /// Rotate a page a quarter turn clockwise.
    Rotate(PageArgs),

    /// Mirror a page left to right.
    Mirror(PageArgs),

    /// Print the draggable gaps of a page as JSON.
    Gaps(PageArgs),

    /// Drag a gap and save the result.
    Drag(DragArgs),

    /// Render a page to SVG.
    Render(RenderArgs),
}

#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    pub file: PathBuf,

    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    /// Template name; defaults to the configured default template.
    #[arg(long)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    pub file: PathBuf,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Debug, Clone, Args)]
pub struct DragArgs {
    #[command(flatten)]
    pub target: PageArgs,

    /// Index into the page's gap list, as printed by `gaps`.
    #[arg(long)]
    pub gap: usize,

    #[arg(long, allow_hyphen_values = true)]
    pub delta: f64,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub target: PageArgs,

    /// Output file; stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Overlay the draggable gaps.
    #[arg(long)]
    pub gaps: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let mut out = std::io::stdout().lock();
    execute(cli.command, settings, &mut out)
}

fn load_settings(config: Option<&Path>) -> Result<EditorSettings> {
    let manager = match config {
        Some(path) => SettingsManager::load_from_file(path)?,
        None => SettingsManager::load_or_default()?,
    };
    Ok(manager.config().editor_settings()?)
}

/// Runs one command, writing its report to `out`.
pub fn execute(command: Commands, settings: EditorSettings, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::New(args) => run_new(args, settings, out),
        Commands::Templates => {
            for template in LayoutTemplate::all() {
                writeln!(
                    out,
                    "{:<22} {} panel(s)  {}",
                    template.as_str(),
                    template.panel_count(),
                    template.description()
                )?;
            }
            Ok(())
        }
        Commands::Info(args) => run_info(args, settings, out),
        Commands::Rotate(args) => edit_page(&args, settings, |editor, page_id| {
            Ok(editor.rotate_page(page_id)?)
        }),
        Commands::Mirror(args) => edit_page(&args, settings, |editor, page_id| {
            Ok(editor.mirror_page(page_id)?)
        }),
        Commands::Gaps(args) => {
            let editor = open(&args.file, settings)?;
            let page_id = page_id(&editor, args.page)?;
            let gaps = editor.resize_gaps(&page_id)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&gaps)?)?;
            Ok(())
        }
        Commands::Drag(args) => {
            let mut applied = 0.0;
            edit_page(&args.target, settings, |editor, page_id| {
                let gaps = editor.resize_gaps(page_id)?;
                let Some(gap) = gaps.get(args.gap) else {
                    bail!(
                        "Page {} has {} gap(s), no gap at index {}",
                        args.target.page,
                        gaps.len(),
                        args.gap
                    );
                };
                applied = editor.drag_gap(page_id, gap, args.delta)?;
                Ok(())
            })?;
            writeln!(out, "applied delta {}", applied)?;
            Ok(())
        }
        Commands::Render(args) => run_render(args, settings, out),
    }
}

fn run_new(args: NewArgs, settings: EditorSettings, out: &mut impl Write) -> Result<()> {
    let template = match &args.template {
        Some(name) => name.parse::<LayoutTemplate>()?,
        None => settings.default_template,
    };
    if args.pages == 0 {
        bail!("A layout needs at least one page");
    }

    let mut editor = EditorState::new(settings);
    if let Some(stem) = args.file.file_stem().and_then(|s| s.to_str()) {
        editor.document_name = stem.trim_end_matches(".panels").to_string();
    }
    for _ in 0..args.pages {
        editor.add_page(template)?;
    }
    editor.save_to_file(&args.file)?;

    writeln!(
        out,
        "Created {} with {} page(s) using {}",
        args.file.display(),
        args.pages,
        template
    )?;
    Ok(())
}

fn run_info(args: FileArgs, settings: EditorSettings, out: &mut impl Write) -> Result<()> {
    let editor = open(&args.file, settings)?;
    let size = editor.page_size();
    let threshold = editor.settings.adjacency_threshold;

    writeln!(out, "{}", editor.document_name)?;
    writeln!(out, "page size: {} x {}", size.width, size.height)?;
    for page in editor.book().pages() {
        let images = page.panels.iter().filter(|p| p.image.is_some()).count();
        writeln!(
            out,
            "page {}: {} panel(s), {} gap(s), {} image(s)  [{}]",
            page.number,
            page.panels.len(),
            calculate_resize_gaps(&page.panels, threshold).len(),
            images,
            page.id
        )?;
    }
    Ok(())
}

fn run_render(
    args: RenderArgs,
    settings: EditorSettings,
    out: &mut impl Write,
) -> Result<()> {
    let editor = open(&args.target.file, settings)?;
    let page = editor.book().page_by_number(args.target.page)?;
    let style = SvgStyle {
        show_gaps: args.gaps,
        adjacency_threshold: editor.settings.adjacency_threshold,
        ..SvgStyle::default()
    };
    let svg = render_page_svg(page, editor.page_size(), &style);

    match &args.output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Rendered page {} to {}", page.number, path.display());
        }
        None => out.write_all(svg.as_bytes())?,
    }
    Ok(())
}

fn open(file: &Path, settings: EditorSettings) -> Result<EditorState> {
    EditorState::load_from_file(file, settings)
}

fn page_id(editor: &EditorState, number: u32) -> Result<String> {
    Ok(editor.book().page_by_number(number)?.id.clone())
}

/// Loads the file, applies `edit` to one page and writes the file back.
fn edit_page<F>(args: &PageArgs, settings: EditorSettings, edit: F) -> Result<()>
where
    F: FnOnce(&mut EditorState, &str) -> Result<()>,
{
    let mut editor = open(&args.file, settings)?;
    let page_id = page_id(&editor, args.page)?;
    edit(&mut editor, &page_id)?;
    if editor.is_modified {
        editor.save()?;
    } else {
        info!("Page {} unchanged, not saving", args.page);
    }
    Ok(())
}
