use crate::customizers;
use crate::model::{BuildRequest, Catalog, ResolveError, ResolvedBuild};
use startgen_types::ids;

/// Resolve the full dependency set for a build request.
///
/// Pure function of (request, catalog): no shared state, idempotent, and it
/// never removes or rewrites starters the caller asked for.
pub fn resolve(request: &BuildRequest, catalog: &Catalog) -> Result<ResolvedBuild, ResolveError> {
    let mut build = ResolvedBuild::default();

    // Starter expansion. The session id is a marker owned by the session
    // customizer and contributes no starter of its own.
    let mut has_starter = false;
    for id in &request.requested {
        if id == ids::DEP_SESSION {
            continue;
        }
        let entry = catalog
            .entry(id)
            .ok_or_else(|| ResolveError::UnknownId(id.clone()))?;
        has_starter |= entry.starter;
        build.add(entry.to_dependency(id));
    }

    if !has_starter {
        build.add(catalog.require(ids::DEP_ROOT_STARTER)?);
    }
    build.add(catalog.require(ids::DEP_TEST_STARTER)?);

    customizers::run_all(request, catalog, &mut build)?;

    Ok(build)
}
