use criterion::criterion_main;


criterion_main! {
    sim::sandbox::benches,
    sim::spawn::benches,
}
