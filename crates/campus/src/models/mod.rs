mod author;
mod category;
mod course;
mod session;
mod user;

pub use author::*;
pub use category::*;
pub use course::*;
pub use session::*;
pub use user::*;

/// One page of a paginated listing
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Listing<T> {
    pub total_elements: u64,
    pub page_no: u64,
    pub total_pages: u64,
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(total_elements: u64, page: Page, data: Vec<T>) -> Listing<T> {
        Listing {
            total_elements,
            page_no: page.no,
            total_pages: total_elements.div_ceil(page.size.max(1)),
            data,
        }
    }
}

/// Pagination window requested by the client
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub no: u64,
    pub size: u64,
}

impl Page {
    pub fn new(no: Option<u64>, size: Option<u64>) -> Page {
        Page {
            no: no.unwrap_or(0),
            size: size.unwrap_or(100).clamp(1, 500),
        }
    }

    pub fn skip(&self) -> u64 {
        self.no * self.size
    }
}
