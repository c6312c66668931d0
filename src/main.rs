use clap::Parser;
use seedmaze::app::{App, Args, RenderStyle};
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    // Logs go to stderr so they never interleave with the rendered maze
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .init();

    let args = Args::parse();
    let style = if args.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Styled
    };
    App::new(style).run(&args, &mut std::io::stdout().lock())
}
