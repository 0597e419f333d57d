fn main() {
    spec_switch::app::cli::run();
}
