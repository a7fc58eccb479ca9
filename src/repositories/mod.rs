mod file_book_repository;
mod traits;

pub use file_book_repository::FileBookRepository;
pub use traits::BookRepository;
