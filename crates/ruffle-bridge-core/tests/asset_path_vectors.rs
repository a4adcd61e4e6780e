//! Asset base path vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ruffle_bridge_core::asset_path::public_path_from_script_src;

use vector_loader::AssetPathVector;

#[test]
fn asset_path_vectors() {
    let vectors: Vec<AssetPathVector> = vector_loader::load("asset_paths.json");
    assert!(!vectors.is_empty());

    for v in vectors {
        let got = public_path_from_script_src(&v.script_src);
        assert_eq!(got, v.expect, "vector={}", v.description);
    }
}

#[test]
fn recomputation_is_idempotent() {
    let vectors: Vec<AssetPathVector> = vector_loader::load("asset_paths.json");
    for v in vectors {
        let once = public_path_from_script_src(&v.script_src);
        let twice = public_path_from_script_src(&once);
        assert_eq!(once, twice, "vector={}", v.description);
    }
}
