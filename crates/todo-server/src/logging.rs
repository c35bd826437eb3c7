use chrono::{DateTime, Local};
use env_logger::{fmt::Formatter, Builder, Env};
use log::Record;
use std::io::{self, Write};

/// Install the `env_logger` backend at `debug` or `info`, unless `RUST_LOG`
/// says otherwise.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder.format(write_record).init();
}

/// Install the backend with an explicit filter such as `todo_server=debug,actix_web=info`.
pub fn init_logging_with_filter(filter: &str) {
    let mut builder = Builder::new();
    builder.parse_filters(filter).format(write_record).init();
}

fn write_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(buf, "{}", format_line(record, &Local::now()))
}

/// `[YYYY-mm-dd HH:MM:SS.mmm] LEVEL [target] module - message`
pub(crate) fn format_line(record: &Record, now: &DateTime<Local>) -> String {
    format!(
        "[{}] {} [{}] {} - {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}
