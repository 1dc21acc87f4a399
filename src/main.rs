fn main() {
    std::process::exit(pidgen::run() as i32);
}
