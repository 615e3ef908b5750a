use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page selection applied explicitly per listing endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        i64::from((self.page - 1) * self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, page_size: u32) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn offset_starts_at_zero_for_first_page() {
        assert_eq!(params(1, 50).offset(), 0);
        assert_eq!(params(3, 20).offset(), 40);
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        assert!(params(1, 0).validate().is_err());
        assert!(params(1, 101).validate().is_err());
        assert!(params(1, 100).validate().is_ok());
    }

    #[test]
    fn total_pages_rounds_up() {
        let meta = PaginationMeta::new(1, 50, 101);
        assert_eq!(meta.total_pages, 3);

        let meta = PaginationMeta::new(1, 50, 0);
        assert_eq!(meta.total_pages, 0);
    }
}
