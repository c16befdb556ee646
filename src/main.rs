use std::process;

fn main() {
    if let Err(err) = fittrack::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
