use docu_chat::domain::Embedding;

#[test]
fn given_parallel_vectors_when_comparing_then_similarity_is_one() {
    let a = Embedding::new(vec![1.0, 2.0]);
    let b = Embedding::new(vec![2.0, 4.0]);

    assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-6);
}

#[test]
fn given_orthogonal_vectors_when_comparing_then_similarity_is_zero() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![0.0, 3.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_zero_or_mismatched_vectors_when_comparing_then_similarity_is_zero() {
    let a = Embedding::new(vec![1.0, 1.0]);

    assert_eq!(a.cosine_similarity(&Embedding::zeros(2)), 0.0);
    assert_eq!(a.cosine_similarity(&Embedding::new(vec![1.0])), 0.0);
}
