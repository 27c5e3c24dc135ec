use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::bookstore::list_bookstores,
        api::bookstore::create_bookstore,
        api::bookstore::update_bookstore,
        api::bookstore::delete_bookstore,
        api::voca_books::list_voca_books,
        api::voca_books::create_voca_book,
        api::voca_books::delete_voca_book,
        api::voca::list_words,
        api::voca::get_word,
        api::voca::update_word,
        api::voca::delete_word,
    ),
    components(
        schemas(
            api::bookstore::CreateBookstoreRequest,
            api::bookstore::UpdateBookstoreRequest,
            api::voca_books::VocaBookUpload,
            api::voca::UpdateWordRequest,
        )
    ),
    tags(
        (name = "voca-admin", description = "Vocabulary admin console API")
    )
)]
pub struct ApiDoc;
