use rand::Rng;
use std::collections::HashSet;
use topk::errors::{ErrorKind, TopKError};
use topk_int_test::test_util::{
    brute_force_documents, create_text_test_context, create_text_test_context_with,
    random_pattern, run_test, TextTestContext, SEPARATOR,
};
use topk_text::{
    CompressedSuffixArray, DocumentHit, IdentityDupMap, PrefixDupMap, RankBitVector, SparseTableRmq, SuffixArray,
    TextIndexConfig, TopDownIndex, TopDownParts, TopKCursor, TopKIndex,
};

fn check_pattern(ctx: &TextTestContext, pattern: &[u8]) {
    let expected = brute_force_documents(ctx.documents(), pattern);
    let hits: Vec<DocumentHit> = ctx.index().top_down(pattern, false, false).collect();

    assert!(
        hits.windows(2).all(|w| w[0].weight >= w[1].weight),
        "pattern {:?}",
        pattern
    );
    let distinct: HashSet<u64> = hits.iter().map(|h| h.document).collect();
    assert_eq!(distinct.len(), hits.len(), "pattern {:?}", pattern);

    let mut hits = hits;
    hits.sort_by_key(|h| h.document);
    let mut expected = expected;
    expected.sort_by_key(|h| h.document);
    assert_eq!(hits, expected, "pattern {:?}", pattern);
}

#[test]
fn test_top_down_matches_brute_force() {
    run_test(41, create_text_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..80 {
            let length = rng.random_range(1..=4);
            let pattern = random_pattern(&mut rng, length, b'e');
            check_pattern(&ctx, &pattern);
        }
        Ok(())
    })
}

#[test]
fn test_pattern_spanning_documents_matches_nothing() {
    run_test(43, create_text_test_context, |ctx| {
        for pair in ctx.documents().windows(2).take(20) {
            let (left, right) = (&pair[0].0, &pair[1].0);
            let mut pattern = left[left.len() - 2..].to_vec();
            pattern.push(SEPARATOR);
            pattern.extend_from_slice(&right[..2]);

            let iter = ctx.index().top_down(&pattern, false, false);
            assert!(iter.done(), "pattern {:?}", pattern);
            assert_eq!(iter.matches(), 0);
            check_pattern(&ctx, &pattern);
        }
        Ok(())
    })
}

#[test]
fn test_top_down_with_large_alphabet() {
    run_test(
        42,
        |seed| create_text_test_context_with(seed, 80, b'z'),
        |ctx| {
            let mut rng = ctx.rng();
            for _ in 0..80 {
                let length = rng.random_range(1..=2);
                let pattern = random_pattern(&mut rng, length, b'z');
                check_pattern(&ctx, &pattern);
            }
            Ok(())
        },
    )
}

#[test]
fn test_empty_pattern_reports_every_document() {
    run_test(43, create_text_test_context, |ctx| {
        check_pattern(&ctx, &[]);
        assert_eq!(
            ctx.index().top_down(&[], false, false).count(),
            ctx.documents().len()
        );
        Ok(())
    })
}

#[test]
fn test_only_match_counts_occurrences() {
    run_test(44, create_text_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..30 {
            let pattern = random_pattern(&mut rng, 2, b'e');
            let occurrences: usize = ctx
                .documents()
                .iter()
                .map(|(tokens, _)| tokens.windows(2).filter(|w| *w == pattern.as_slice()).count())
                .sum();

            let iter = ctx.index().top_down(&pattern, false, true);
            assert!(iter.done());
            assert_eq!(iter.matches(), occurrences);
        }
        Ok(())
    })
}

#[test]
fn test_index_counts() {
    run_test(45, create_text_test_context, |ctx| {
        let tokens: usize = ctx.documents().iter().map(|(t, _)| t.len()).sum();
        assert_eq!(ctx.index().doc_cnt(), ctx.documents().len() as u64);
        assert_eq!(ctx.index().word_cnt(), tokens as u64);
        Ok(())
    })
}

#[test]
fn test_snippets_are_unsupported() {
    run_test(46, create_text_test_context, |ctx| {
        let cursor = ctx.index().topk(b"a", false, false);
        let err: TopKError = cursor.extract_snippet(10).unwrap_err().into();
        assert_eq!(err.kind(), &ErrorKind::UnsupportedOperation);
        Ok(())
    })
}

#[test]
fn test_scenario_documents_reported_once() {
    // "a" matches three depth-0 candidates: A:4, B:9, A:4
    let csa = SuffixArray::new(b"aaa".to_vec());
    let config = TextIndexConfig::default();
    let tails = RankBitVector::with_ones(config.levels() * csa.size(), [1, 2, 3]);
    let weights = vec![4, 9, 4];
    let index: TopDownIndex<_, RankBitVector, IdentityDupMap> = TopDownIndex::new(
        TopDownParts {
            doc_border: RankBitVector::with_ones(csa.size(), [1, 3]),
            csa,
            dup_map: IdentityDupMap,
            tails,
            weights_rmq: SparseTableRmq::new(&weights),
            weights,
            documents: vec![0, 1, 0],
        },
        &config,
    )
    .unwrap();

    let hits: Vec<DocumentHit> = index.topk(b"a", false, false).into_results().collect();
    assert_eq!(hits, vec![DocumentHit::new(1, 9), DocumentHit::new(0, 4)]);
}

#[test]
fn test_depth_strata_and_duplicate_ranges() {
    // suffixes of "aab" by rank: "", "aab", "ab", "b"; pairs (1, 2) and
    // (2, 3) contribute two and one duplicate entries
    let csa = SuffixArray::new(b"aab".to_vec());
    let config = TextIndexConfig::new().with_levels(2);
    // entries 0 and 2 at depth 0, entry 1 at depth 1
    let tails = RankBitVector::with_ones(6, [0, 2, 4]);
    let weights = vec![5, 1, 8];
    let index: TopDownIndex<_> = TopDownIndex::new(
        TopDownParts {
            doc_border: RankBitVector::with_ones(csa.size(), [3]),
            csa,
            dup_map: PrefixDupMap::from_counts(&[0, 0, 2, 1]),
            tails,
            weights_rmq: SparseTableRmq::new(&weights),
            weights,
            documents: vec![0, 1, 2],
        },
        &config,
    )
    .unwrap();

    let hits: Vec<DocumentHit> = index.top_down(b"a", false, false).collect();
    assert_eq!(hits, vec![DocumentHit::new(2, 8), DocumentHit::new(0, 5)]);

    // depth 0 only for the empty pattern
    let hits: Vec<DocumentHit> = index.top_down(&[], false, false).collect();
    assert_eq!(hits, vec![DocumentHit::new(0, 5), DocumentHit::new(1, 1)]);

    // "b" covers no pair, so no duplicate entries
    let iter = index.top_down(b"b", false, false);
    assert!(iter.done());
    assert_eq!(iter.matches(), 1);
}
