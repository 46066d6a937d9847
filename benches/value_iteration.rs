use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use valiter::{TabularMdp, ValueIterationSolver};

/// A chain of `n` states: each non-final state can advance to its
/// successor or fall back to the start, the final state is terminal.
fn chain(n: usize) -> TabularMdp<usize, &'static str> {
    let mut mdp = TabularMdp::new();
    for s in 0..n {
        mdp.add_state(s, if s + 1 == n { 10.0 } else { -0.1 });
    }
    for s in 0..n - 1 {
        mdp.add_transition(s, "advance", vec![(s + 1, 0.8), (0, 0.2)]);
        mdp.add_transition(s, "reset", vec![(0, 1.0)]);
    }
    mdp
}

fn bench_value_iteration(c: &mut Criterion) {
    c.bench_function("value_iteration_chain_100_states_100_sweeps", |b| {
        b.iter_batched(
            || chain(100),
            ValueIterationSolver::new,
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_value_iteration);
criterion_main!(benches);
