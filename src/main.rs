fn main() {
    optgrad_frontend::run();
}
