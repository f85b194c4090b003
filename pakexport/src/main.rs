//! Batch exporter for fontpak bitmap fonts.
//!
//! Decodes every `.font` file in a directory and writes, per font, a PNG
//! raster sheet of the glyph atlas (for diagnostics) plus one SVG file per
//! exportable character, named by numeric codepoint. Each file is processed
//! independently; a bad font never aborts the batch.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use glyphpak::{export_glyphs, GlyphOutcome, SvgPen, VectorGlyph};
use read_fontpak::{Diagnostic, DiagnosticSink, FontData, FontPak};

#[derive(clap::Parser, Debug)]
#[command(about = "Export fontpak bitmap fonts as SVG glyphs")]
struct Args {
    /// Directory containing .font files
    fonts: PathBuf,

    /// Directory to write exported fonts into
    #[arg(short, long, default_value = "export")]
    output: PathBuf,

    /// Print font summaries without writing any files
    #[arg(long)]
    list: bool,

    /// Write only the per-font raster sheets, skipping SVG output
    #[arg(long)]
    rasters_only: bool,
}

struct Error(String);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<read_fontpak::ReadError> for Error {
    fn from(err: read_fontpak::ReadError) -> Self {
        Error(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error(err.to_string())
    }
}

/// Forwards decode diagnostics to the logger, tagged with the source file.
struct LogSink<'a> {
    path: &'a Path,
}

impl DiagnosticSink for LogSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            // also reported per record at export time
            Diagnostic::UnresolvedCodepoint { .. } => {
                log::debug!("{}: {diagnostic}", self.path.display())
            }
            _ => log::warn!("{}: {diagnostic}", self.path.display()),
        }
    }
}

#[derive(Debug, Default)]
struct ExportStats {
    exported: usize,
    skipped: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let files = match collect_font_files(&args.fonts) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("failed to read {}: {err}", args.fonts.display());
            std::process::exit(2);
        }
    };
    if files.is_empty() {
        eprintln!("no .font files in {}", args.fonts.display());
        return;
    }

    let mut failures = 0usize;
    for path in &files {
        match process_file(path, &args) {
            Ok(stats) => {
                if !args.list {
                    println!(
                        "{} {} ({} exported, {} skipped)",
                        paint(ansi_term::Colour::Green, "ok"),
                        path.display(),
                        stats.exported,
                        stats.skipped
                    );
                }
            }
            Err(err) => {
                failures += 1;
                println!(
                    "{} {}: {err}",
                    paint(ansi_term::Colour::Red, "failed"),
                    path.display()
                );
            }
        }
    }
    if failures > 0 {
        std::process::exit(1);
    }
}

/// All regular `.font` files in `dir`, sorted for reproducible runs.
fn collect_font_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "font"))
        .collect();
    files.sort();
    Ok(files)
}

fn process_file(path: &Path, args: &Args) -> Result<ExportStats, Error> {
    let file = fs::File::open(path)?;
    // Safety: the map is read-only and fonts are not expected to change
    // out from under a running export.
    let mmap = unsafe { memmap2::Mmap::map(&file)? };
    let mut sink = LogSink { path };
    let pak = FontPak::read(FontData::new(&mmap), &mut sink)?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("font");
    if args.list {
        print_summary(name, &pak);
        return Ok(ExportStats::default());
    }

    let font_dir = args.output.join(name);
    fs::create_dir_all(&font_dir)?;
    write_raster_sheet(&pak, &font_dir.join("atlas.png"))?;

    let mut stats = ExportStats::default();
    if !args.rasters_only {
        for (index, _record, outcome) in export_glyphs(&pak) {
            match outcome {
                GlyphOutcome::Vector { character, glyph } => {
                    let svg_path = font_dir.join(format!("{}.svg", character as u32));
                    fs::write(svg_path, svg_document(&glyph))?;
                    stats.exported += 1;
                }
                GlyphOutcome::SkippedEmpty => {
                    log::debug!("{name}: record {index} has no pixels, skipping");
                    stats.skipped += 1;
                }
                GlyphOutcome::SkippedUnknown { raw } => {
                    log::warn!(
                        "{name}: record {index}: codepoint byte 0x{raw:02X} \
                         has no character identity, skipping"
                    );
                    stats.skipped += 1;
                }
                GlyphOutcome::Failed(err) => {
                    log::warn!("{name}: record {index}: {err}, skipping");
                    stats.skipped += 1;
                }
            }
        }
    }
    Ok(stats)
}

/// Render the atlas dark-on-light as a PNG for eyeballing glyph placement.
fn write_raster_sheet(pak: &FontPak<'_>, path: &Path) -> Result<(), Error> {
    let (width, height) = (u32::from(pak.atlas.width()), u32::from(pak.atlas.height()));
    if width == 0 || height == 0 {
        log::warn!("{}: atlas is empty, not writing", path.display());
        return Ok(());
    }
    let sheet = image::GrayImage::from_fn(width, height, |x, y| {
        if pak.atlas.is_foreground(x as u16, y as u16) {
            image::Luma([0u8])
        } else {
            image::Luma([255u8])
        }
    });
    sheet.save(path)?;
    Ok(())
}

fn svg_document(glyph: &VectorGlyph) -> String {
    let mut pen = SvgPen::new();
    glyph.draw(&mut pen);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n  \
         <path d=\"{}\"/>\n</svg>\n",
        glyph.width(),
        glyph.height(),
        pen.as_ref()
    )
}

fn print_summary(name: &str, pak: &FontPak<'_>) {
    println!(
        "{name}: version {}, {} characters, atlas {}x{}",
        pak.header.version,
        pak.characters.len(),
        pak.atlas.width(),
        pak.atlas.height()
    );
    println!("Char    X     Y  Size   Baseline");
    println!("--------------------------------");
    for record in &pak.characters {
        let ident = match record.character() {
            Some(c) if !c.is_control() => format!("'{c}'"),
            Some(_) => format!("0x{:02X}", record.codepoint),
            None => format!("?{:02X}", record.codepoint),
        };
        println!(
            "{ident:<5} {:>4} {:>5}  {:>2}x{:<3} {:>4}",
            record.x, record.y, record.width, record.height, record.baseline
        );
    }
}

fn paint(color: ansi_term::Colour, text: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}
