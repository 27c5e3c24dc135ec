pub mod admin;
pub mod bookstore;
pub mod bookstore_category;
pub mod bookstore_has_category;
pub mod check_in;
pub mod daily_sentence;
pub mod goals;
pub mod level;
pub mod user;
pub mod user_goals;
pub mod user_has_token;
pub mod user_recent_study;
pub mod user_voca_book;
pub mod voca;
pub mod voca_book;
pub mod voca_book_map;
pub mod voca_example;
pub mod voca_example_map;
pub mod voca_meaning;
pub mod voca_meaning_map;
