use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    // RUST_LOG=input_core=debug shows typing-mode transitions.
    let _ = env_logger::try_init();

    if let Err(e) = platform::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
