use sorairo_core::{AppError, WeatherError};

use crate::types::ContentError;

impl From<ContentError> for AppError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::InvalidPageIndex(index) => {
                AppError::Weather(WeatherError::InvalidPageIndex(index))
            }
        }
    }
}
