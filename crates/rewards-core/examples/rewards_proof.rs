//! End-to-end walkthrough: build a policy and a private state, prove the
//! claimed reward, ship the bundle through its wire encoding and verify it.

use rand::Rng;
use rewards_core::gens::setup;
use rewards_core::policy::{PolicyVector, StateVector};
use rewards_core::wire::RewardsProofBytes;
use rewards_core::{prove_reward, verify_reward};

fn main() {
    let catalog_size: usize = 64;
    let mut rng = rand::thread_rng();

    // Public reward weights and private interaction counters.
    let policy =
        PolicyVector::new((0..catalog_size).map(|_| rng.gen_range(0..10)).collect()).unwrap();
    let state =
        StateVector::new((0..catalog_size).map(|_| rng.gen_range(0..10)).collect()).unwrap();

    // reward = <state, policy>
    let reward = policy.expected_reward(&state).unwrap();
    println!("Policy vector: {:?}", policy.weights());
    println!("State: {:?}", state.counters());
    println!("Reward: {reward}");

    let gens = setup(catalog_size);
    let proof = prove_reward(&gens, reward, &state, &policy).unwrap();

    let bundle = RewardsProofBytes::encode(&proof);
    let bundle_size = bundle.range_proof.len()
        + bundle.linear_proof.len()
        + 32 * (bundle.linear_g.len() + 4);
    println!("Size of proof bundle: {} bytes", bundle_size);

    let decoded = bundle.decode().unwrap();
    if verify_reward(&gens, &decoded, &policy) {
        println!("Rewards proof verification successful!");
    } else {
        println!("Rewards proof verification failed!");
    }
}
