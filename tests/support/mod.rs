#![allow(dead_code)]

use filmsearch::testkit::catalog::TempCatalog;

/// A small catalog: 25 "LOVE STORY n" horror films from 2010, a war film,
/// and a couple of films in other genres and years.
pub fn film_catalog() -> TempCatalog {
    TempCatalog::builder()
        .genre(1, "Action")
        .genre(7, "Drama")
        .genre(11, "Horror")
        .films(1, 25, "LOVE STORY", 2010, 11)
        .film(100, "WAR NOTTING", 1998, 1)
        .film(101, "HORROR REIGN", 2022, 11)
        .film(102, "GLOVE BEACH", 2003, 7)
        .build()
}
