//! DevTools PDF CLI tool
//!
//! Builds `Page.printToPDF` requests from command-line flags and settings
//! files, and prints them as JSON for any DevTools client to send.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devtools_pdf::layout::PaperFormat;
use devtools_pdf::pdf::count_pages;
use devtools_pdf::{HtmlTemplateBuilder, PdfRequestBuilder, PrintSettings};

/// DevTools PDF - Build print-to-PDF requests with custom headers/footers
#[derive(Parser)]
#[command(name = "devtools-pdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # A4 request with a page-number footer
    devtools-pdf request --paper-format a4 --footer-html \"Page [page] of [pages]\" --expand-placeholders

    # Full DevTools command, options from a settings file
    devtools-pdf request --settings print.json --command --id 42

    # Preview the combined header/footer template
    devtools-pdf template --header-html \"<b>Draft</b>\" --footer-html \"[url]\" --expand-placeholders

    # Count pages in a printed PDF
    devtools-pdf info output.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Page.printToPDF request and print it as JSON
    Request {
        #[command(flatten)]
        print: PrintArgs,

        /// Emit a full DevTools command envelope instead of bare params
        #[arg(long)]
        command: bool,

        /// Command id used with --command
        #[arg(long, default_value_t = 1)]
        id: u64,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the combined header/footer template HTML
    Template {
        #[command(flatten)]
        print: PrintArgs,
    },

    /// Show information about a printed PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

/// Print options shared by the request-building commands
#[derive(Args)]
struct PrintArgs {
    /// JSON settings file; flags given on the command line override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Landscape orientation
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    landscape: Option<bool>,

    /// Show the engine's header and footer
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    display_header_footer: Option<bool>,

    /// Print background graphics
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    print_background: Option<bool>,

    /// Rendering scale
    #[arg(long)]
    scale: Option<f64>,

    /// Named paper size (letter, legal, tabloid, ledger, a0-a6)
    #[arg(long)]
    paper_format: Option<PaperFormat>,

    /// Paper size in inches as WIDTH,HEIGHT
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    paper_size: Option<Vec<f64>>,

    /// Paper width in inches
    #[arg(long)]
    paper_width: Option<f64>,

    /// Paper height in inches
    #[arg(long)]
    paper_height: Option<f64>,

    /// Margin on all sides in inches
    #[arg(long)]
    margin: Option<f64>,

    /// Top margin in inches
    #[arg(long)]
    margin_top: Option<f64>,

    /// Bottom margin in inches
    #[arg(long)]
    margin_bottom: Option<f64>,

    /// Left margin in inches
    #[arg(long)]
    margin_left: Option<f64>,

    /// Right margin in inches
    #[arg(long)]
    margin_right: Option<f64>,

    /// Pages to print, e.g. "1-3,5"
    #[arg(long)]
    page_ranges: Option<String>,

    /// Silently ignore invalid page ranges
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    ignore_invalid_page_ranges: Option<bool>,

    /// Raw engine header template
    #[arg(long)]
    header_template: Option<String>,

    /// Raw engine footer template
    #[arg(long)]
    footer_template: Option<String>,

    /// HTML shown at the top of every page
    #[arg(long)]
    header_html: Option<String>,

    /// HTML shown at the bottom of every page
    #[arg(long)]
    footer_html: Option<String>,

    /// Prefer the page size declared in CSS
    #[arg(long = "prefer-css-page-size", num_args = 0..=1, default_missing_value = "true")]
    prefer_css_page_size: Option<bool>,

    /// Expand [page], [pages], [title], [url], [date] and [br] in header/footer HTML
    #[arg(long)]
    expand_placeholders: bool,

    /// Text for the [date] placeholder (defaults to the print date)
    #[arg(long)]
    date: Option<String>,
}

impl PrintArgs {
    /// Merge the flags over the settings file (if any) and configure a builder
    fn into_builder(self) -> anyhow::Result<PdfRequestBuilder> {
        let mut settings = match &self.settings {
            Some(path) => PrintSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => PrintSettings::default(),
        };

        override_with(&mut settings.landscape, self.landscape);
        override_with(&mut settings.display_header_footer, self.display_header_footer);
        override_with(&mut settings.print_background, self.print_background);
        override_with(&mut settings.scale, self.scale);
        override_with(&mut settings.paper_format, self.paper_format);
        override_with(&mut settings.paper_width, self.paper_width);
        override_with(&mut settings.paper_height, self.paper_height);
        override_with(&mut settings.margin, self.margin);
        override_with(&mut settings.margin_top, self.margin_top);
        override_with(&mut settings.margin_bottom, self.margin_bottom);
        override_with(&mut settings.margin_left, self.margin_left);
        override_with(&mut settings.margin_right, self.margin_right);
        override_with(&mut settings.page_ranges, self.page_ranges);
        override_with(&mut settings.ignore_invalid_page_ranges, self.ignore_invalid_page_ranges);
        override_with(&mut settings.header_template, self.header_template);
        override_with(&mut settings.footer_template, self.footer_template);
        override_with(&mut settings.header_html, self.header_html);
        override_with(&mut settings.footer_html, self.footer_html);
        override_with(&mut settings.prefer_css_page_size, self.prefer_css_page_size);
        override_with(&mut settings.date, self.date);
        settings.expand_placeholders |= self.expand_placeholders;

        debug!(?settings, "effective print settings");

        let mut builder = settings.to_builder();
        if let Some(size) = self.paper_size {
            builder.set_paper_size(size)?;
        }
        Ok(builder)
    }
}

fn override_with<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devtools_pdf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Request { print, command, id, output } => cmd_request(print, command, id, output),
        Commands::Template { print } => cmd_template(print),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Build a request and print it as JSON
fn cmd_request(
    print: PrintArgs,
    command: bool,
    id: u64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let request = print.into_builder()?.build_pdf_request();

    let json = if command {
        request.to_command(id)?
    } else {
        request.to_params()?
    };
    let text = serde_json::to_string_pretty(&json)?;

    match output {
        Some(path) => {
            std::fs::write(&path, text + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Request written to: {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

/// Print the synthesized header/footer template
fn cmd_template(print: PrintArgs) -> anyhow::Result<()> {
    let builder = print.into_builder()?;

    if !builder.has_header_footer_html() {
        anyhow::bail!("Nothing to render: pass --header-html and/or --footer-html");
    }

    let request = builder.request();
    let template = HtmlTemplateBuilder::new(
        request.paper_width.unwrap_or(devtools_pdf::builder::DEFAULT_PAPER_WIDTH),
        request.paper_height.unwrap_or(devtools_pdf::builder::DEFAULT_PAPER_HEIGHT),
    )
    .create_template(builder.header_html(), builder.footer_html());

    println!("{}", template);
    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    let page_count = count_pages(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("File: {}", input.display());
    println!("Pages: {}", page_count);

    Ok(())
}
