use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Formats diagnostics for stderr, next to the lookup results on stdout.
///
/// Each event becomes one line with a coloured status symbol and no
/// timestamp or target, so failed lookups (`[-]`) and the run summary (`[+]`)
/// read as annotations beside the `mac / vendor` lines rather than as a
/// log file.
pub struct DiagnosticFormatter;

impl<S, N> FormatEvent<S, N> for DiagnosticFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn default_level(quiet: u8) -> &'static str {
    match quiet {
        0 => "info",
        1 => "warn",
        _ => "error",
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so that stdout
/// only carries lookup results. `RUST_LOG` overrides the `-q` level.
pub fn init_logging(quiet: u8) {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(DiagnosticFormatter)
        .init();
}
