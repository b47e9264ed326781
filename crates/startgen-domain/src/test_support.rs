use crate::model::{BuildRequest, Catalog, CatalogEntry};
use startgen_types::ids;

/// Catalog fixture mirroring the builtin catalog closely enough for the
/// engine and customizer tests.
pub fn catalog() -> Catalog {
    let mut c = Catalog::default();

    c.insert(
        ids::DEP_ROOT_STARTER,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter"),
    );
    c.insert(
        ids::DEP_TEST_STARTER,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter-test"),
    );
    c.insert(
        ids::DEP_WEB,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter-web"),
    );
    c.insert(
        ids::DEP_DATA_REDIS,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter-data-redis"),
    );
    c.insert(
        ids::DEP_DATA_REDIS_REACTIVE,
        CatalogEntry::starter(
            "org.springframework.boot",
            "spring-boot-starter-data-redis-reactive",
        ),
    );
    c.insert(
        ids::DEP_DATA_JPA,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter-data-jpa"),
    );
    c.insert(
        ids::DEP_JDBC,
        CatalogEntry::starter("org.springframework.boot", "spring-boot-starter-jdbc"),
    );

    c.insert(
        ids::DEP_SESSION,
        CatalogEntry::library("org.springframework.session", "spring-session"),
    );
    c.insert(
        ids::DEP_SESSION_CORE,
        CatalogEntry::library("org.springframework.session", "spring-session-core"),
    );
    c.insert(
        ids::DEP_SESSION_DATA_REDIS,
        CatalogEntry::library("org.springframework.session", "spring-session-data-redis"),
    );
    c.insert(
        ids::DEP_SESSION_JDBC,
        CatalogEntry::library("org.springframework.session", "spring-session-jdbc"),
    );

    c
}

pub fn request(ids: &[&str], version: &str) -> BuildRequest {
    BuildRequest::new(ids.iter().copied(), version.parse().unwrap())
}
