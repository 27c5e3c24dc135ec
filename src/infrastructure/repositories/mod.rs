//! Repository implementations using SeaORM

pub mod bookstore_repository;
pub mod voca_book_repository;
pub mod voca_repository;

pub use bookstore_repository::SeaOrmBookstoreRepository;
pub use voca_book_repository::SeaOrmVocaBookRepository;
pub use voca_repository::SeaOrmVocaRepository;
