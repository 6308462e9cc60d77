//! Response envelope shared by every API operation.

use crate::error::{Result, SurplusError};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Normalized response: `{status, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }

    /// Returns the payload, treating a missing one as a bad response.
    pub fn into_data(self) -> Result<T> {
        self.data
            .ok_or_else(|| SurplusError::bad_response("Response did not include any data"))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

// Listing routes answer with a bare array, with
// `{data, total, page, limit, total_pages}`, or (pending requests) with
// `{requests, pagination: {total, page, limit, pages}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    Items(Vec<T>),
    Paged {
        data: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default)]
        limit: Option<u32>,
        #[serde(default)]
        total_pages: Option<u32>,
    },
    Nested {
        #[serde(alias = "donations")]
        requests: Vec<T>,
        #[serde(default)]
        pagination: Pagination,
    },
}

#[derive(Default, Deserialize)]
struct Pagination {
    total: Option<u64>,
    page: Option<u32>,
    limit: Option<u32>,
    pages: Option<u32>,
}

impl<T> Page<T> {
    fn assemble(items: Vec<T>, pagination: Pagination) -> Self {
        let len = items.len();
        Page {
            items,
            total: pagination
                .total
                .unwrap_or_else(|| u64::try_from(len).unwrap_or(u64::MAX)),
            page: pagination.page.unwrap_or(1),
            limit: pagination
                .limit
                .unwrap_or_else(|| u32::try_from(len).unwrap_or(u32::MAX)),
            total_pages: pagination.pages.unwrap_or(1),
        }
    }
}

impl<T> From<PageRepr<T>> for Page<T> {
    fn from(repr: PageRepr<T>) -> Self {
        match repr {
            PageRepr::Items(items) => Page::assemble(items, Pagination::default()),
            PageRepr::Paged {
                data,
                total,
                page,
                limit,
                total_pages,
            } => Page::assemble(
                data,
                Pagination {
                    total,
                    page,
                    limit,
                    pages: total_pages,
                },
            ),
            PageRepr::Nested {
                requests,
                pagination,
            } => Page::assemble(requests, pagination),
        }
    }
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        PageRepr::<T>::deserialize(deserializer).map(Page::from)
    }
}
