fn main() {
    std::process::exit(o3de_cli::run());
}
