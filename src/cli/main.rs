use std::path::PathBuf;

use stoat_sat::{context::Context, io::files, reports::Report, types::err};

mod parse_args;

#[cfg(feature = "xz")]
fn context_from_xz_path(
    path: PathBuf,
    config: stoat_sat::config::Config,
) -> Result<Context, err::ErrorKind> {
    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(err::ErrorKind::from(err::FileError::Read(path))),
    };

    let mut ctx = Context::from_config(config);
    ctx.read_formula(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))?;
    Ok(ctx)
}

fn main() {
    let matches = parse_args::cli().get_matches();
    let config = parse_args::config_from_args(&matches);

    // Required by clap, so always present.
    let path = match matches.get_one::<PathBuf>("path") {
        Some(path) => path.clone(),
        None => {
            println!("c Path to formula required");
            std::process::exit(1);
        }
    };

    println!("c Reading formula from {path:?}");

    let loaded = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => context_from_xz_path(path.clone(), config),

        _ => files::context_from_path(path.clone(), config),
    };

    let mut ctx = match loaded {
        Ok(ctx) => ctx,
        Err(err::ErrorKind::File(e)) => {
            println!("c Failed to open formula file: {e:?}");
            std::process::exit(1);
        }
        Err(err::ErrorKind::Parse(e)) => {
            println!("c Malformed formula: {e:?}");
            std::process::exit(1);
        }
        Err(e) => {
            println!("c Error reading formula: {e:?}");
            std::process::exit(1);
        }
    };

    let result = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    println!("s {}", ctx.report());

    if result == Report::Satisfiable {
        if let Ok(Some(true)) = matches.try_get_one::<bool>("model") {
            println!("v {}", ctx.valuation_string());
        }
    }

    if let Ok(Some(true)) = matches.try_get_one::<bool>("table") {
        for line in ctx.assignment_table().lines() {
            println!("c {line}");
        }
    }
}
