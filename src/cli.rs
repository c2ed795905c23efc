// src/cli.rs
use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::api::ApiClient;
use crate::config::consts::{MAX_FILE_SIZE, PREVIEW_ROWS};
use crate::config::options::{AppOptions, ExportFormat};
use crate::csv;
use crate::file;
use crate::progress::Progress;
use crate::result::ParseResult;
use crate::store;

pub struct Params {
    pub file: Option<PathBuf>,
    pub api_url: Option<String>,
    pub health: bool,
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub preview: usize,
    pub save_api_url: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            file: None,
            api_url: None,
            health: false,
            out: None,
            format: ExportFormat::Json,
            include_headers: true,
            preview: PREVIEW_ROWS,
            save_api_url: false,
        }
    }
}

/// Stage messages go through the normal log pipeline.
struct CliProgress;

impl Progress for CliProgress {
    fn stage(&mut self, percent: u8, msg: &str) {
        info!("Upload: {percent:>3}% {msg}");
    }
}

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut settings = store::load_settings();
    if let Some(url) = &params.api_url {
        settings.api_url = s!(url.trim().trim_end_matches('/'));
        if params.save_api_url {
            let p = store::save_settings(&settings)?;
            info!("Settings: API URL saved → {}", p.display());
        }
    }

    let client = ApiClient::new(&settings.api_url)?;

    if params.health {
        let health = client.health()?;
        println!("{}: {}", client.base_url(), health.describe());
        return Ok(());
    }

    let Some(path) = params.file.clone() else {
        bail!("No input file. Try --help.");
    };

    let file_info = file::validate_sav(&path, MAX_FILE_SIZE)?;
    println!("{} ({})", file_info.name, file_info.size_display());

    let mut prog = CliProgress;
    let result = client.parse_file(&path, &mut prog)?;

    print_summary(&result, params.preview);

    if let Some(out) = &params.out {
        let mut options = AppOptions::default();
        options.export.format = params.format;
        options.export.include_headers = params.include_headers;
        options.export.set_path(&out.to_string_lossy());

        let view = result.data_table(None);
        let contents = file::to_export_string(&options, &result, &view)?;
        let written = file::write_export_single(&options.export, &contents)?;
        println!("Exported: {}", written.display());
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--health" => params.health = true,
            "--api" => {
                let v = args.next().context("Missing value for --api")?;
                params.api_url = Some(v); }
            "--save-api-url" => params.save_api_url = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().context("Missing output path")?)),
            "--format" => {
                let v = args.next().context("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "json" => ExportFormat::Json,
                    "csv" => ExportFormat::Csv,
                    other => bail!("Unknown format: {}", other),
                };}
            "--no-headers" => params.include_headers = false,
            "--preview" => {
                let v = args.next().context("Missing value for --preview")?;
                params.preview = v.parse().with_context(|| format!("Invalid row count: {v}"))?;}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') && params.file.is_none() => {
                params.file = Some(PathBuf::from(other));
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }

    Ok(())
}

fn print_summary(result: &ParseResult, preview: usize) {
    println!(
        "Variables: {}  Rows: {}",
        result.variable_count(),
        result.row_count()
    );

    for row in &result.metadata_table().rows {
        if let [key, value] = &row[..] {
            println!("  {key}: {value}");
        }
    }

    if result.row_count() > 0 {
        println!();
        let view = result.data_table(Some(preview));
        print!("{}", csv::table_to_string(&view, true, ','));
        if result.row_count() > preview {
            println!("({} more rows)", result.row_count() - preview);
        }
    }
}
