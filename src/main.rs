use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grocy_label_printer::{BarcodeKind, LabelRequest, Labeler, Result, Settings};
use log::{error, info};

/// Render a grocery label to PNG. Label stock and fonts come from the
/// environment (LABEL_SIZE, NAME_FONT, ...).
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Product name
    #[arg(long)]
    text: String,
    /// Barcode payload
    #[arg(long, default_value = "")]
    barcode: String,
    /// QRCode or DataMatrix, defaults to BARCODE_FORMAT
    #[arg(long)]
    barcode_kind: Option<String>,
    #[arg(long)]
    best_before: Option<String>,
    #[arg(long)]
    purchased: Option<String>,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    /// Where to write the PNG
    #[arg(long, short, default_value = "label.png")]
    output: PathBuf,
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::from_env()?;
    let labeler = Labeler::from_settings(&settings)?;
    info!("{}", labeler.describe());

    let barcode_kind = args
        .barcode_kind
        .map(|kind| kind.parse::<BarcodeKind>().unwrap_or_default())
        .unwrap_or(settings.barcode_format);

    let request = LabelRequest {
        text: args.text,
        barcode: args.barcode,
        barcode_kind,
        best_before_date: args.best_before,
        purchased_date: args.purchased,
        amount: args.amount,
        unit_name: args.unit,
    };

    let png = labeler.render_png(&request)?;
    std::fs::write(&args.output, png)?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
