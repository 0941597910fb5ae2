use std::error::Error;

use sharpen_text::{args, arg_parsers::Location, help, init, plan::ExecutionPlan, preview};

const BIN_NAME: &str = "sharpen-text";

fn main() {
    init::init();
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        eprintln!("Sharpening failed.");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit(BIN_NAME);
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;

    plan.execute()?;
    let message = format!(
        "Image successfully sharpened and saved as: {}",
        plan.output_file().display()
    );
    match plan.output_file() {
        Location::Path(_) => println!("{message}"),
        // stdout is carrying the image itself
        Location::Stdio => eprintln!("{message}"),
    }

    maybe_preview(&plan);
    Ok(())
}

/// Only reached once the output is written; a missing display is not an error.
fn maybe_preview(plan: &ExecutionPlan) {
    if !plan.preview() {
        return;
    }
    match (plan.input_file(), plan.output_file()) {
        (Some(input), Location::Path(output)) => {
            preview::show(input, output);
        }
        _ => log::warn!("preview is not available when writing to standard output"),
    }
}
