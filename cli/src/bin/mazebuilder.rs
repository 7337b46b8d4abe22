use clap::{App, Arg};
use log::{debug, info};
use mazebuilder_cli::{render, MazeConfig};
use std::process;

fn main() {
    if std::env::var("MAZE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let matches = App::new("Maze Builder")
        .about("Builds a random perfect maze and prints it as ASCII art")
        .arg(Arg::with_name("width").required(true))
        .arg(Arg::with_name("height").required(true))
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for a reproducible maze"),
        )
        .get_matches();

    let config = match MazeConfig::from_args(
        matches.value_of("width").unwrap(),
        matches.value_of("height").unwrap(),
        matches.value_of("seed"),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    debug!("maze options: {:?}", config);

    let maze = match config.build() {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("failed to build maze: {}", e);
            process::exit(1);
        }
    };

    info!(
        "built {}x{} maze with {} walls",
        maze.width(),
        maze.height(),
        maze.walls().len()
    );

    print!("{}", render(&maze));
}
