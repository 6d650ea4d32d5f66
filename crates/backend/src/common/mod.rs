mod error;
pub mod metrics;
mod picture_id;
mod result;
mod state;

pub use error::ApiError;
pub use picture_id::PictureId;
pub use result::ApiResult;
pub use state::AppState;
