//! Initialization that needs to be done on startup

use std::io::Write;

/// Sets up logging to stderr. Defaults to warnings only; `RUST_LOG=debug` shows every pipeline stage.
///
/// Logs go to stderr so that `-` as the output file keeps stdout clean for the image data.
pub fn init() {
    // ignore the error if a logger is already installed, e.g. by a test harness
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
