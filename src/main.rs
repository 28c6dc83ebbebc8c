use driftfield::Animator;

fn main() {
    if let Err(e) = Animator::new().run() {
        eprintln!("driftfield: {}", e);
        std::process::exit(1);
    }
}
