use rusty_matchplay::args;
use rusty_matchplay::controller::league::build_report;
use rusty_matchplay::view::standings::render_report_text;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(args::log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = args::args_checks();
    tracing::info!(league = %args.league.name, events = args.league.events.len(), "league loaded");

    let report = build_report(&args);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report_text(&report)?);
    }
    Ok(())
}
