//! Demo entry point.

use dropgrid_demo::{DemoArgs, render, replay};

fn main() {
    env_logger::init();
    log::info!("Starting dropgrid demo");

    let output = DemoArgs::parse(std::env::args().skip(1))
        .and_then(|args| args.load_config())
        .and_then(|config| replay(&config))
        .and_then(|items| render(&items));

    match output {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("dropgrid-demo: {err}");
            std::process::exit(1);
        }
    }
}
