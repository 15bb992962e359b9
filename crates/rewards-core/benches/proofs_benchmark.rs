use criterion::{criterion_group, criterion_main, Criterion};
use curve25519_dalek::scalar::Scalar;
use rewards_core::gens::{setup, REWARD_RANGE_BITS};
use rewards_core::policy::{PolicyVector, StateVector};
use rewards_core::{claim, linear, range};

fn criterion_benchmark(c: &mut Criterion) {
    benchmark_rangeproof(c);
    benchmark_linearproof(c);
    benchmark_rewards_proof(c);
}

fn benchmark_rangeproof(c: &mut Criterion) {
    let sum_of_counters: u64 = 254;
    let gens = setup(64);
    c.bench_function("rangeproof_prover", |b| {
        b.iter(|| range::prove(&gens, sum_of_counters, REWARD_RANGE_BITS).unwrap())
    });

    let (proof, commitment) = range::prove(&gens, sum_of_counters, REWARD_RANGE_BITS).unwrap();
    c.bench_function("rangeproof_verifier", |b| {
        b.iter(|| range::verify(&gens, &proof, &commitment, REWARD_RANGE_BITS))
    });
}

fn benchmark_linearproof(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let n: usize = 64;
    let private: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
    let public: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();

    let gens = setup(n);
    c.bench_function("linearproof_prover", |b| {
        b.iter(|| linear::prove(&gens, private.clone(), public.clone()).unwrap())
    });

    let (proof, commitments) = linear::prove(&gens, private, public.clone()).unwrap();
    c.bench_function("linearproof_verifier", |b| {
        b.iter(|| linear::verify(&proof, public.clone(), &commitments))
    });
}

fn benchmark_rewards_proof(c: &mut Criterion) {
    let catalog_size = 64;
    let gens = setup(catalog_size);
    let policy = PolicyVector::uniform(catalog_size, 7).unwrap();
    let state = StateVector::new(vec![3; catalog_size]).unwrap();
    let reward = policy.expected_reward(&state).unwrap();

    c.bench_function("rewards_proof_prover", |b| {
        b.iter(|| claim::prove_reward(&gens, reward, &state, &policy).unwrap())
    });

    let proof = claim::prove_reward(&gens, reward, &state, &policy).unwrap();
    c.bench_function("rewards_proof_verifier", |b| {
        b.iter(|| claim::verify_reward(&gens, &proof, &policy))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
