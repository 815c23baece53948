fn main() {
    if let Err(err) = costgraph::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
