use startgen_domain::model::{Catalog, CatalogEntry};
use startgen_types::ids;

const BOOT: &str = "org.springframework.boot";
const SESSION: &str = "org.springframework.session";

/// The builtin preset catalog.
///
/// Keep this small and readable. Anything beyond the stock starters belongs
/// in a catalog file.
pub fn builtin() -> Catalog {
    let mut c = Catalog::default();

    // Implicit starters
    c.insert(
        ids::DEP_ROOT_STARTER,
        CatalogEntry::starter(BOOT, "spring-boot-starter"),
    );
    c.insert(
        ids::DEP_TEST_STARTER,
        CatalogEntry::starter(BOOT, "spring-boot-starter-test"),
    );

    // Requestable starters
    c.insert(ids::DEP_WEB, CatalogEntry::starter(BOOT, "spring-boot-starter-web"));
    c.insert(
        ids::DEP_DATA_REDIS,
        CatalogEntry::starter(BOOT, "spring-boot-starter-data-redis"),
    );
    c.insert(
        ids::DEP_DATA_REDIS_REACTIVE,
        CatalogEntry::starter(BOOT, "spring-boot-starter-data-redis-reactive"),
    );
    c.insert(
        ids::DEP_DATA_JPA,
        CatalogEntry::starter(BOOT, "spring-boot-starter-data-jpa"),
    );
    c.insert(
        ids::DEP_JDBC,
        CatalogEntry::starter(BOOT, "spring-boot-starter-jdbc"),
    );

    // Session artifacts. The `session` entry is the legacy generic artifact;
    // the others are what the modern band selects from.
    c.insert(ids::DEP_SESSION, CatalogEntry::library(SESSION, "spring-session"));
    c.insert(
        ids::DEP_SESSION_CORE,
        CatalogEntry::library(SESSION, "spring-session-core"),
    );
    c.insert(
        ids::DEP_SESSION_DATA_REDIS,
        CatalogEntry::library(SESSION, "spring-session-data-redis"),
    );
    c.insert(
        ids::DEP_SESSION_JDBC,
        CatalogEntry::library(SESSION, "spring-session-jdbc"),
    );

    c
}
