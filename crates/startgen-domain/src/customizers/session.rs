use crate::model::{BuildRequest, Catalog, ResolveError, ResolvedBuild};
use startgen_types::{ids, PlatformVersion, Qualifier, VersionRange};

/// From 2.0.0.M3 the session artifact is selected per backing store; older
/// platforms get the single generic artifact.
fn modern_band() -> VersionRange {
    VersionRange::at_least(PlatformVersion::new(2, 0, 0, Qualifier::Milestone(3)))
}

pub(crate) fn run(
    request: &BuildRequest,
    catalog: &Catalog,
    build: &mut ResolvedBuild,
) -> Result<(), ResolveError> {
    if !request.contains(ids::DEP_SESSION) {
        return Ok(());
    }
    if modern_band().matches(&request.platform_version) {
        run_modern(request, catalog, build)
    } else {
        run_legacy(catalog, build)
    }
}

/// Legacy band: one generic session artifact, whatever stores are requested.
fn run_legacy(catalog: &Catalog, build: &mut ResolvedBuild) -> Result<(), ResolveError> {
    build.add(catalog.require(ids::DEP_SESSION)?);
    Ok(())
}

/// Modern band. The store checks are independent `if`s on purpose: requesting
/// both redis and jdbc yields both session artifacts.
fn run_modern(
    request: &BuildRequest,
    catalog: &Catalog,
    build: &mut ResolvedBuild,
) -> Result<(), ResolveError> {
    let mut store_matched = false;

    if request.contains_any(&[ids::DEP_DATA_REDIS, ids::DEP_DATA_REDIS_REACTIVE]) {
        build.add(catalog.require(ids::DEP_SESSION_DATA_REDIS)?);
        store_matched = true;
    }
    if request.contains(ids::DEP_JDBC) {
        build.add(catalog.require(ids::DEP_SESSION_JDBC)?);
        store_matched = true;
    }

    if !store_matched {
        build.add(catalog.require(ids::DEP_SESSION_CORE)?);
    }
    Ok(())
}
