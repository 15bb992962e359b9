use super::*;

const CATALOG_SIZE: usize = 32;

fn policy() -> PolicyVector {
    PolicyVector::new((1..=CATALOG_SIZE as u64).collect()).unwrap()
}

#[tokio::test]
async fn prove_verify_and_list_claims() {
    let engine = ClaimEngine::seed(&DatabaseLocation::InMemory).await.unwrap();
    engine.initialize(policy()).await.unwrap();

    let prover = RewardsProver::new(CATALOG_SIZE);
    let state = StateVector::new(vec![2; CATALOG_SIZE]).unwrap();
    let proved = prover.prove_claim(state, policy()).await.unwrap();
    assert_eq!(
        proved.reward,
        (1..=CATALOG_SIZE as u64).map(|w| w * 2).sum::<u64>()
    );

    let record = engine
        .verify_rewards_proof("author-e2e", proved.proof)
        .await
        .unwrap();
    assert!(record.verified);

    let claims = engine
        .get_claims_for_author("author-e2e", 0, None)
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].claim_id, record.claim_id);
}

#[tokio::test]
async fn forged_reward_claim_is_rejected_but_recorded() {
    let engine = ClaimEngine::seed(&DatabaseLocation::InMemory).await.unwrap();
    engine.initialize(policy()).await.unwrap();

    // The prover lies about its state by proving against an inflated
    // policy; the ledger's committed policy must reject the claim.
    let inflated = PolicyVector::uniform(CATALOG_SIZE, 1_000_000).unwrap();
    let prover = RewardsProver::new(CATALOG_SIZE);
    let state = StateVector::new(vec![1; CATALOG_SIZE]).unwrap();
    let proved = prover.prove_claim(state, inflated).await.unwrap();

    let record = engine
        .verify_rewards_proof("author-forged", proved.proof)
        .await
        .unwrap();
    assert!(!record.verified);

    // The rejection is part of the audit trail.
    let claims = engine
        .get_claims_for_author("author-forged", 0, None)
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
}

#[tokio::test]
async fn claims_survive_an_engine_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let location = DatabaseLocation::Directory(temp_dir.path().to_string_lossy().to_string());

    let prover = RewardsProver::new(CATALOG_SIZE);
    let state = StateVector::new(vec![3; CATALOG_SIZE]).unwrap();
    let proved = prover.prove_claim(state, policy()).await.unwrap();

    let claim_id = {
        let engine = ClaimEngine::seed(&location).await.unwrap();
        engine.initialize(policy()).await.unwrap();
        let record = engine
            .verify_rewards_proof("author-persist", proved.proof)
            .await
            .unwrap();
        assert!(record.verified);
        record.claim_id
    };

    let engine = ClaimEngine::seed(&location).await.unwrap();
    let stored = engine.get_claim_by_id(claim_id).await.unwrap().unwrap();
    assert!(stored.verified);
    assert_eq!(stored.author, "author-persist");
}

#[tokio::test]
async fn claims_are_paged_per_author() {
    let engine = ClaimEngine::seed(&DatabaseLocation::InMemory).await.unwrap();
    engine.initialize(policy()).await.unwrap();

    let prover = RewardsProver::new(CATALOG_SIZE);
    for counters in 1..=3u64 {
        let state = StateVector::new(vec![counters; CATALOG_SIZE]).unwrap();
        let proved = prover.prove_claim(state, policy()).await.unwrap();
        engine
            .verify_rewards_proof("author-paged", proved.proof)
            .await
            .unwrap();
    }

    let first_page = engine
        .get_claims_for_author("author-paged", 0, Some(2))
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);

    let second_page = engine
        .get_claims_for_author("author-paged", 1, Some(2))
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);

    let other_author = engine
        .get_claims_for_author("someone-else", 0, None)
        .await
        .unwrap();
    assert!(other_author.is_empty());
}
