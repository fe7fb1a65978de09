#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Set `RUST_LOG=tritri=trace`
/// to see which predicate decided each case.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const PERMS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Reorders the three vertices of a flat coordinate array.
pub fn permute(t: &[f64; 9], [i, j, k]: [usize; 3]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for (slot, src) in [i, j, k].into_iter().enumerate() {
        out[slot * 3..slot * 3 + 3].copy_from_slice(&t[src * 3..src * 3 + 3]);
    }
    out
}

/// Every vertex order of both inputs, in both argument orders.
pub fn all_orders(a: &[f64; 9], b: &[f64; 9]) -> impl Iterator<Item = ([f64; 9], [f64; 9])> {
    let (a, b) = (*a, *b);
    PERMS.into_iter().flat_map(move |pa| {
        PERMS.into_iter().flat_map(move |pb| {
            let (x, y) = (permute(&a, pa), permute(&b, pb));
            [(x, y), (y, x)]
        })
    })
}

/// A point repeated as all three vertices.
pub fn point(x: f64, y: f64, z: f64) -> [f64; 9] {
    [x, y, z, x, y, z, x, y, z]
}
