//! Document Masking CLI Application.
//!
//! This binary provides a command-line interface for the docmask library,
//! applying a masking request to pre-rendered page images with proper
//! error handling and user feedback.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use docmask::{
    is_pdf, local_path, masked_file_name, parent_dir, MaskingRequest, MaskingResponse,
    MaskingService, OverlayRenderer, PageSet,
};

/// Document Field Masking Tool
///
/// Redacts extracted fields on document page images by drawing opaque
/// patches with masked replacement text. Page rasterization happens
/// upstream: PDFs must arrive as pre-rendered page images via --page.
#[derive(Parser)]
#[command(name = "docmask")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Masking request JSON file (fields, rules, document metadata)
    #[arg(short, long, value_name = "FILE")]
    request: PathBuf,

    /// Pre-rendered page image (repeat per page; defaults to the request's
    /// input URI when it names a raster image)
    #[arg(short, long, value_name = "FILE")]
    page: Vec<PathBuf>,

    /// Directory for masked page images
    #[arg(short, long, value_name = "DIR", default_value = "masked")]
    out_dir: PathBuf,

    /// Write the response JSON here instead of stdout
    #[arg(long, value_name = "FILE")]
    response: Option<PathBuf>,

    /// Font file for replacement text (default: discover a system font)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Masking command handler owning the output configuration.
struct MaskingHandler {
    out_dir: PathBuf,
    response_path: Option<PathBuf>,
    font: Option<PathBuf>,
    verbose: bool,
}

impl MaskingHandler {
    fn new(cli: &Cli) -> Self {
        Self {
            out_dir: cli.out_dir.clone(),
            response_path: cli.response.clone(),
            font: cli.font.clone(),
            verbose: cli.verbose,
        }
    }

    /// Executes a masking request against the given page images.
    fn run(&self, request_path: &Path, pages: &[PathBuf]) -> Result<()> {
        let request = self.load_request(request_path)?;
        let page_paths = self.resolve_pages(&request, pages)?;

        if self.verbose {
            println!("Input:  {}", request.input_file_uri);
            println!("Pages:  {}", page_paths.len());
            println!("Rules:  {}", request.masking_rules.len());
        }

        let mut page_set = PageSet::load(&page_paths).context("Failed to load page images")?;
        let service = self.build_service()?;

        let report = service
            .apply(
                &request.extracted_fields,
                &request.masking_rules,
                page_set.images_mut(),
            )
            .context("Masking failed")?;

        let written = page_set
            .write_masked(&self.out_dir)
            .context("Failed to write masked pages")?;

        let response = MaskingResponse {
            masked_file_uri: format!(
                "{}{}",
                parent_dir(&request.input_file_uri),
                masked_file_name(&page_paths[0])
            ),
            masked_fields: report.masked_fields.clone(),
            metadata: report.into_metadata(request.document_type),
        };
        self.emit_response(&response)?;

        println!(
            "✓ Masked {} field(s) across {} page(s) → {}",
            response.metadata.fields_processed,
            written.len(),
            self.out_dir.display()
        );

        Ok(())
    }

    fn load_request(&self, path: &Path) -> Result<MaskingRequest> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Invalid masking request in {}", path.display()))
    }

    /// Resolves the page raster list for a request.
    ///
    /// Explicit --page arguments win. Otherwise a raster input URI serves
    /// as the single page; a PDF input without --page is a usage error,
    /// since rasterization is the upstream collaborator's job.
    fn resolve_pages(&self, request: &MaskingRequest, pages: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !pages.is_empty() {
            return Ok(pages.to_vec());
        }
        if is_pdf(&request.input_file_uri) {
            anyhow::bail!(
                "Input is a PDF; supply pre-rendered page images with --page \
                 (PDF rasterization is handled upstream)"
            );
        }
        Ok(vec![local_path(&request.input_file_uri)])
    }

    fn build_service(&self) -> Result<MaskingService> {
        let renderer = match &self.font {
            Some(path) => OverlayRenderer::from_font_file(path)
                .with_context(|| format!("Failed to load font {}", path.display()))?,
            None => OverlayRenderer::discover()
                .context("No usable font found; supply one with --font")?,
        };
        Ok(MaskingService::new(renderer))
    }

    fn emit_response(&self, response: &MaskingResponse) -> Result<()> {
        let json =
            serde_json::to_string_pretty(response).context("Failed to serialize response")?;
        match &self.response_path {
            Some(path) => fs::write(path, json)
                .with_context(|| format!("Failed to write response to {}", path.display()))?,
            None => println!("{}", json),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let handler = MaskingHandler::new(&cli);
    handler.run(&cli.request, &cli.page)
}
