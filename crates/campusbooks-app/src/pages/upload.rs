use campusbooks_store::{Store, StoreError};
use campusbooks_types::forms::{ListingForm, ValidationErrors};
use campusbooks_types::models::{Book, User};

/// Result of submitting the "List Your Book" form.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// Listing created; the UI navigates back to the dashboard.
    Created(Book),
    /// Field errors to render inline; nothing was created.
    Invalid(ValidationErrors),
}

pub fn submit(
    store: &Store,
    seller: &User,
    form: &ListingForm,
) -> Result<UploadOutcome, StoreError> {
    match form.validate() {
        Ok(draft) => Ok(UploadOutcome::Created(store.create_book(draft, seller)?)),
        Err(errors) => Ok(UploadOutcome::Invalid(errors)),
    }
}
