use crate::model::{BuildRequest, Catalog, ResolveError, ResolvedBuild};

mod session;


pub fn run_all(
    request: &BuildRequest,
    catalog: &Catalog,
    build: &mut ResolvedBuild,
) -> Result<(), ResolveError> {
    session::run(request, catalog, build)?;
    Ok(())
}
