use std::io;
use std::process;

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = symtab::demo::run(&mut out) {
        eprintln!("{err}");
        process::exit(1);
    }
}
