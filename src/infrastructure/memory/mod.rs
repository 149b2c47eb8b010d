//! In-memory implementations

mod draft_repository;

pub use draft_repository::InMemoryDraftRepository;
