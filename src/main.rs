use std::env;

use sdltutorial::{
    lessons::{find_lesson, LESSONS},
    logging::init_logging,
    sdl_wrapper::SDLContext,
    settings::parse_args,
};

fn print_usage() {
    println!("Usage: {} <lesson> [asset dir]", env!("CARGO_PKG_NAME"));
    println!();
    println!("Lessons:");
    for lesson in LESSONS {
        println!("  {:<12} {}", lesson.name, lesson.description);
    }
}

fn main() {
    init_logging();

    let args = match parse_args(env::args_os()) {
        None => {
            print_usage();
            return;
        }
        Some(args) => args,
    };

    let lesson = match find_lesson(&args.lesson) {
        None => {
            println!("Unknown lesson: {}", args.lesson);
            print_usage();
            return;
        }
        Some(lesson) => lesson,
    };

    let mut sdl_context = match SDLContext::new() {
        Ok(sdl_context) => sdl_context,
        Err(string) => {
            log::error!("Error while setting up sdl context: {}", string);
            return;
        }
    };

    log::info!(
        "running lesson {} with assets from {}",
        lesson.name,
        args.settings.asset_dir.display()
    );

    if let Err(err) = (lesson.run)(&mut sdl_context, &args.settings) {
        log::error!("{}", err);
    }
}
