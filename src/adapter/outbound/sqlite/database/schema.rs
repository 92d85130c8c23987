// Catalog tables read by the film search. The schema is owned by the
// catalog, not by this program.

diesel::table! {
    category (category_id) {
        category_id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    film (film_id) {
        film_id -> Integer,
        title -> Text,
        release_year -> Integer,
    }
}

diesel::table! {
    film_category (film_id, category_id) {
        film_id -> Integer,
        category_id -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(category, film, film_category);
