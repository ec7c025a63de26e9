use std::process::exit;

fn main() {
    if let Err(e) = visitor_lists::app::run_cli() {
        visitor_lists::app::status_line("ERR", &e);
        exit(1);
    }
}
