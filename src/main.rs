fn main() {
    ztp::app::cli::run();
}
