use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned by the library service. `0` means "not yet assigned".
pub type BookId = i64;

/// Sentinel id carried by a book that has not been created yet
pub const UNASSIGNED_BOOK_ID: BookId = 0;

/// A book record as exchanged with the `/api/Books` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub page_count: i32,
    pub excerpt: String,
    /// Calendar date, transmitted as `YYYY-MM-DD`
    #[serde(with = "iso_date")]
    pub publish_date: NaiveDate,
}

/// Serde helpers for ISO 8601 calendar dates.
///
/// Output is always `YYYY-MM-DD`. Input also accepts a full date-time
/// (`2024-03-01T00:00:00`), of which only the date part is kept.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    /// Parse a `YYYY-MM-DD` string, ignoring any time component
    pub fn parse(value: &str) -> Option<NaiveDate> {
        let date_part = value.trim().split('T').next().unwrap_or_default();
        NaiveDate::parse_from_str(date_part, FORMAT).ok()
    }

    pub fn format(date: &NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid publish date: {}", raw)))
    }
}

/// Strip everything that is not an ASCII digit
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Editable fields of the book form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Description,
    PageCount,
    Excerpt,
    PublishDate,
}

/// Text buffer behind the create and edit forms.
///
/// Every field is kept as the raw input string so the user can type freely;
/// conversion to a [`Book`] happens on submit through [`BookForm::to_book`].
#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub page_count: String,
    pub excerpt: String,
    pub publish_date: String,
}

/// Specific validation errors for the book form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Description is required")]
    EmptyDescription,
    #[error("Page count must be a whole number")]
    InvalidPageCount,
    #[error("Excerpt is required")]
    EmptyExcerpt,
    #[error("Publish date must be a valid date")]
    InvalidPublishDate,
}

/// Validation result for the book form
#[derive(Debug, Clone, PartialEq)]
pub struct BookFormValidation {
    pub is_valid: bool,
    pub errors: Vec<BookValidationError>,
}

impl BookFormValidation {
    /// Message for the first error, if any
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| e.to_string())
    }
}

impl BookForm {
    /// Blank form used when adding a new book
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: UNASSIGNED_BOOK_ID,
            title: String::new(),
            description: String::new(),
            page_count: "0".to_string(),
            excerpt: String::new(),
            publish_date: iso_date::format(&today),
        }
    }

    /// Update one field from raw input. Page count keeps digits only.
    pub fn set_field(&mut self, field: BookField, value: String) {
        match field {
            BookField::Title => self.title = value,
            BookField::Description => self.description = value,
            BookField::PageCount => self.page_count = digits_only(&value),
            BookField::Excerpt => self.excerpt = value,
            BookField::PublishDate => self.publish_date = value,
        }
    }

    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Description => &self.description,
            BookField::PageCount => &self.page_count,
            BookField::Excerpt => &self.excerpt,
            BookField::PublishDate => &self.publish_date,
        }
    }

    pub fn validate(&self) -> BookFormValidation {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(BookValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            errors.push(BookValidationError::EmptyDescription);
        }
        if self.page_count.trim().parse::<i32>().is_err() {
            errors.push(BookValidationError::InvalidPageCount);
        }
        if self.excerpt.trim().is_empty() {
            errors.push(BookValidationError::EmptyExcerpt);
        }
        if iso_date::parse(&self.publish_date).is_none() {
            errors.push(BookValidationError::InvalidPublishDate);
        }

        BookFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert the buffer into a wire model, or report every invalid field
    pub fn to_book(&self) -> Result<Book, Vec<BookValidationError>> {
        let validation = self.validate();
        if !validation.is_valid {
            return Err(validation.errors);
        }

        let page_count = self
            .page_count
            .trim()
            .parse::<i32>()
            .map_err(|_| vec![BookValidationError::InvalidPageCount])?;
        let publish_date = iso_date::parse(&self.publish_date)
            .ok_or_else(|| vec![BookValidationError::InvalidPublishDate])?;

        Ok(Book {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            page_count,
            excerpt: self.excerpt.clone(),
            publish_date,
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            description: book.description.clone(),
            page_count: book.page_count.to_string(),
            excerpt: book.excerpt.clone(),
            publish_date: iso_date::format(&book.publish_date),
        }
    }
}
