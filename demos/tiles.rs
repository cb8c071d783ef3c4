//! Print the path data for tile variants placed at one grid cell.
//!
//! Usage: cargo run --example tiles --features tracing -- [x] [y] [unit] [kind...]
//!
//! Set RUST_LOG=bauhaus=debug to see the arc layout as it is computed.

use bauhaus::{Unit, VariantKind};
use miette::{IntoDiagnostic, WrapErr};
use tracing_subscriber::EnvFilter;

fn arg(args: &[String], i: usize, default: f64) -> miette::Result<f64> {
    match args.get(i) {
        Some(raw) => raw
            .parse::<f64>()
            .into_diagnostic()
            .wrap_err_with(|| format!("argument {} is not a number: {raw:?}", i + 1)),
        None => Ok(default),
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let x = arg(&args, 0, 0.0)?;
    let y = arg(&args, 1, 0.0)?;
    let unit_px = arg(&args, 2, 100.0)?;

    let kinds = if args.len() > 3 {
        args[3..]
            .iter()
            .map(|name| name.parse::<VariantKind>())
            .collect::<Result<Vec<_>, _>>()?
    } else {
        VariantKind::ALL.to_vec()
    };

    for kind in kinds {
        let tile = kind.at((x, y), unit_px);
        match tile.draw() {
            Ok(paths) => {
                println!("{kind} (width {}):", tile.width());
                for path in paths {
                    println!("  <path d=\"{path}\"/>");
                }
            }
            Err(err) => eprintln!("{:?}", miette::Report::new(err)),
        }
    }

    Ok(())
}
