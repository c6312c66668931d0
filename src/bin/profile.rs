use seedmaze::{app::App, generators::Generator};

fn main() -> std::io::Result<()> {
    let app = App::default();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    for generator in Generator::ALL {
        app.profile(1001, 1001, generator, num_iters)?;
    }
    Ok(())
}
