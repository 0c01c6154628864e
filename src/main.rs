use std::{env, process};

fn main() {
    process::exit(amplimap::cli::run(env::args_os()));
}
