use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

/// Text as printed to the console, cut to `limit` characters when given.
pub fn console_text(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => match text.char_indices().nth(limit) {
            Some((cut, _)) => format!("{} [...]", &text[..cut]),
            None => text.to_string(),
        },
        None => text.to_string(),
    }
}

/// Prints `text` framed by blank lines.
pub fn console_log(text: &str, limit: Option<usize>) {
    println!("\n{}\n", console_text(text, limit));
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.title.trim().is_empty() {
        anyhow::bail!("title must not be empty");
    }

    if args.title.contains(['/', '\\']) {
        anyhow::bail!("title must not contain path separators");
    }

    if let Some(preview) = args.preview {
        if preview == 0 {
            anyhow::bail!("--preview must be greater than 0");
        }
    }

    Ok(())
}
