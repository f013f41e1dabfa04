/// Binary entrypoint for the `subset-bench` executable.
///
/// Keeps the binary thin — the sweep and the generators live in the
/// `subset_bench_lib` crate so tests and benches can call them directly.
fn main() {
    subset_bench_lib::run();
}
