//! Property-based tests for the resolution engine.
//!
//! These verify invariants around:
//! - idempotence and determinism of `resolve`
//! - uniqueness of emitted coordinates
//! - requested starters surviving resolution untouched

use crate::engine::resolve;
use crate::model::BuildRequest;
use crate::test_support::catalog;
use proptest::prelude::*;
use startgen_types::{ids, PlatformVersion, Qualifier};

fn arb_qualifier() -> impl Strategy<Value = Qualifier> {
    prop_oneof![
        (1u32..20).prop_map(Qualifier::Milestone),
        (1u32..20).prop_map(Qualifier::ReleaseCandidate),
        Just(Qualifier::Snapshot),
        Just(Qualifier::Release),
    ]
}

fn arb_version() -> impl Strategy<Value = PlatformVersion> {
    (1u32..4, 0u32..10, 0u32..10, arb_qualifier())
        .prop_map(|(major, minor, patch, q)| PlatformVersion::new(major, minor, patch, q))
}

/// Arbitrary subsets of the requestable vocabulary, any version.
fn arb_request() -> impl Strategy<Value = BuildRequest> {
    let vocab = vec![
        ids::DEP_SESSION,
        ids::DEP_WEB,
        ids::DEP_DATA_REDIS,
        ids::DEP_DATA_REDIS_REACTIVE,
        ids::DEP_DATA_JPA,
        ids::DEP_JDBC,
    ];
    (prop::sample::subsequence(vocab, 0..=6), arb_version())
        .prop_map(|(requested, version)| BuildRequest::new(requested, version))
}

proptest! {
    #[test]
    fn resolution_is_idempotent(req in arb_request()) {
        let cat = catalog();
        prop_assert_eq!(resolve(&req, &cat).unwrap(), resolve(&req, &cat).unwrap());
    }

    #[test]
    fn emitted_coordinates_are_unique(req in arb_request()) {
        let build = resolve(&req, &catalog()).unwrap();
        let coords: Vec<String> = build.dependencies.iter().map(|d| d.coordinate()).collect();
        let mut dedup = coords.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(coords.len(), dedup.len());
    }

    #[test]
    fn requested_starters_survive_resolution(req in arb_request()) {
        let cat = catalog();
        let build = resolve(&req, &cat).unwrap();
        for id in &req.requested {
            if id == ids::DEP_SESSION {
                continue;
            }
            let dep = cat.lookup(id).unwrap();
            prop_assert!(build.dependencies.contains(&dep), "missing {}", dep);
        }
    }

    #[test]
    fn test_starter_is_always_present(req in arb_request()) {
        let build = resolve(&req, &catalog()).unwrap();
        prop_assert!(build.has_artifact("org.springframework.boot", "spring-boot-starter-test"));
    }

    #[test]
    fn root_starter_appears_iff_no_starter_requested(req in arb_request()) {
        let build = resolve(&req, &catalog()).unwrap();
        let wants_root = req.requested.iter().all(|id| id == ids::DEP_SESSION);
        prop_assert_eq!(
            build.has_artifact("org.springframework.boot", "spring-boot-starter"),
            wants_root
        );
    }

    #[test]
    fn session_artifacts_appear_iff_session_requested(req in arb_request()) {
        let build = resolve(&req, &catalog()).unwrap();
        let has_session_artifact = build
            .dependencies
            .iter()
            .any(|d| d.group == "org.springframework.session");
        prop_assert_eq!(has_session_artifact, req.contains(ids::DEP_SESSION));
    }
}
