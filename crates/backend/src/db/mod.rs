mod picture;
mod repository;

pub use picture::Picture;
pub use repository::Repository;
