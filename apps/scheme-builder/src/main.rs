mod builder;

fn main() -> Result<(), eframe::Error> {
    builder::run()
}
